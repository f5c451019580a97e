use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ModuleConfig {
    #[serde(rename = "type")]
    pub module_type: String,
    pub name: String,
    pub version: String,
    pub remark: String,
    pub path: String,
}
