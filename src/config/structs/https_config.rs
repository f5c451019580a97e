use serde::{Deserialize, Serialize};
use crate::config::structs::certificate_config::ServerCertificateConfig;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpsConfig {
    pub enabled: bool,
    pub port: i32,
    pub cert: ServerCertificateConfig,
}
