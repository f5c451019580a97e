use serde::{Deserialize, Serialize};

/// The optional roles that register routes on the shared router.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RoleKind {
    Cloud,
    Node,
}
