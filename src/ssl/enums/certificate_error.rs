use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("Certificate file not found: {0}")]
    CertFileNotFound(String),
    #[error("CA certificate file not found: {0}")]
    CaFileNotFound(String),
    #[error("Failed to parse certificate: {0}")]
    CertParseError(String),
    #[error("No private key found in file: {0}")]
    NoKeyFound(String),
    #[error("Failed to build TLS configuration: {0}")]
    ConfigError(String),
    #[error("Failed to generate certificate: {0}")]
    GenerateError(String),
}
