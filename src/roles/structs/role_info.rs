use serde::{Deserialize, Serialize};
use crate::roles::enums::role_kind::RoleKind;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoleInfo {
    pub role: RoleKind,
    pub module: String,
    pub version: String,
    pub instance_id: String,
    pub port: u16,
    pub channels: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_server: Option<String>,
}
