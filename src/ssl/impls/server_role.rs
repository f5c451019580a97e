use crate::ssl::enums::server_role::ServerRole;

pub const CA_CERTIFICATE_FILE: &str = "ca.crt";
pub const SERVER_CERTIFICATE_EXTENSION: &str = "pfx";

impl ServerRole {
    /// File stem of the role's server certificate under `<root>/crt`.
    pub fn certificate_stem(&self) -> &'static str {
        match self {
            ServerRole::Https => "server",
            ServerRole::Cloud => "cloud",
            ServerRole::Node => "node",
        }
    }

    /// Whether the role also trusts a CA certificate.
    pub fn has_ca(&self) -> bool {
        !matches!(self, ServerRole::Https)
    }

    pub fn server_certificate_file(&self) -> String {
        format!("{}.{}", self.certificate_stem(), SERVER_CERTIFICATE_EXTENSION)
    }
}

impl std::fmt::Display for ServerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerRole::Https => write!(f, "https"),
            ServerRole::Cloud => write!(f, "cloud"),
            ServerRole::Node => write!(f, "node"),
        }
    }
}
