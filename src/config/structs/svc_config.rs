use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SvcConfig {
    pub name: String,
    #[serde(skip)]
    pub args: String,
    #[serde(skip)]
    pub boot_time: Option<DateTime<Local>>,
}
