use serde::{Deserialize, Serialize};
use crate::config::structs::certificate_config::MutualCertificateConfig;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeConfig {
    pub enabled: bool,
    #[serde(skip)]
    pub instance_id: String,
    pub cert: MutualCertificateConfig,
    pub cloud_server: CloudServerConfig,
}

/// The cloud role this node dials out to.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudServerConfig {
    pub address: String,
    pub port: i32,
}
