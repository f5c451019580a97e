use thiserror::Error;
use crate::roles::enums::role_error::RoleError;
use crate::ssl::enums::certificate_error::CertificateError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Role construction failed: {0}")]
    Role(#[from] RoleError),
    #[error("TLS material unusable: {0}")]
    Certificate(#[from] CertificateError),
    #[error("Listener {listener} has an invalid port {port}")]
    InvalidPort { listener: String, port: i32 },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
