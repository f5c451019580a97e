use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SysConfig {
    pub svc: SysSvcConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SysSvcConfig {
    pub custom: CustomSvcConfig,
}

/// Folders for user supplied services managed by the gateway.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomSvcConfig {
    pub app: String,
    pub log: String,
}
