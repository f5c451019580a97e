use crate::roles::enums::role_kind::RoleKind;

impl RoleKind {
    /// Scope segment below the API base path.
    pub fn segment(&self) -> &'static str {
        match self {
            RoleKind::Cloud => "cloud",
            RoleKind::Node => "node",
        }
    }
}

impl std::fmt::Display for RoleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoleKind::Cloud => write!(f, "CLOUD"),
            RoleKind::Node => write!(f, "NODE"),
        }
    }
}
