use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::config::structs::cloud_config::CloudConfig;
use crate::config::structs::http_config::HttpConfig;
use crate::config::structs::https_config::HttpsConfig;
use crate::config::structs::log_config::LogConfig;
use crate::config::structs::module_config::ModuleConfig;
use crate::config::structs::node_config::NodeConfig;
use crate::config::structs::site_config::SiteConfig;
use crate::config::structs::svc_config::SvcConfig;
use crate::config::structs::sys_config::SysConfig;

/// Well-known port of the cloud role, used by both the cloud listener and
/// the node's outbound connection when none is configured.
pub const DEFAULT_CLOUD_PORT: i32 = 6931;
pub const DEFAULT_HTTP_PORT: i32 = 8085;
pub const DEFAULT_HTTPS_PORT: i32 = 8443;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    #[serde(skip)]
    pub path: PathBuf,
    pub module: ModuleConfig,
    pub log: LogConfig,
    pub svc: SvcConfig,
    pub http: HttpConfig,
    pub https: HttpsConfig,
    pub cloud: CloudConfig,
    pub node: NodeConfig,
    pub site: SiteConfig,
    pub sys: SysConfig,
}
