use serde::{Deserialize, Serialize};

/// A certificate on disk. Only `file` is interpreted during resolution.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificateFile {
    pub file: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerCertificateConfig {
    pub server: CertificateFile,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MutualCertificateConfig {
    pub server: CertificateFile,
    pub ca: CertificateFile,
}
