use thiserror::Error;
use crate::roles::enums::role_kind::RoleKind;

#[derive(Debug, Error)]
pub enum RoleError {
    #[error("{role} role certificate missing: {path}")]
    CertificateMissing { role: RoleKind, path: String },
    #[error("{role} role port {port} is out of range")]
    InvalidPort { role: RoleKind, port: i32 },
}
