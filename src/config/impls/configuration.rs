use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::cloud_config::CloudConfig;
use crate::config::structs::configuration::{Configuration, DEFAULT_CLOUD_PORT, DEFAULT_HTTPS_PORT, DEFAULT_HTTP_PORT};
use crate::config::structs::http_config::HttpConfig;
use crate::config::structs::https_config::HttpsConfig;
use crate::config::structs::log_config::LogConfig;
use crate::config::structs::node_config::{CloudServerConfig, NodeConfig};

impl Configuration {
    /// Configuration written on first start. Paths stay blank here and are
    /// derived from the root folder by [`Configuration::resolve`].
    pub fn init() -> Configuration {
        Configuration {
            log: LogConfig {
                folder: String::new(),
                level: String::from("info"),
            },
            http: HttpConfig {
                enabled: true,
                port: DEFAULT_HTTP_PORT,
            },
            https: HttpsConfig {
                enabled: false,
                port: DEFAULT_HTTPS_PORT,
                ..Default::default()
            },
            cloud: CloudConfig {
                enabled: false,
                port: DEFAULT_CLOUD_PORT,
                ..Default::default()
            },
            node: NodeConfig {
                enabled: false,
                cloud_server: CloudServerConfig {
                    address: String::new(),
                    port: DEFAULT_CLOUD_PORT,
                },
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, serde_json::Error> {
        serde_json::from_slice(data)
    }

    pub fn load_file(path: &Path) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError { path: path.display().to_string(), source: e }),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(mut cfg) => {
                        cfg.path = path.to_path_buf();
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError { path: path.display().to_string(), source: e }),
                }
            }
        }
    }

    pub fn to_json(&self) -> Result<String, ConfigurationError> {
        serde_json::to_string_pretty(self).map_err(ConfigurationError::SerializeError)
    }

    /// Writes the configuration as pretty JSON, creating missing parent folders.
    pub fn save_file(&self, path: &Path) -> Result<(), ConfigurationError> {
        let data = self.to_json()?;
        let io_error = |e| ConfigurationError::IOError { path: path.display().to_string(), source: e };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        let mut file = File::create(path).map_err(io_error)?;
        file.write_all(data.as_bytes()).map_err(io_error)
    }

    /// Copies the fields that only exist for the lifetime of the process.
    pub fn carry_runtime(&mut self, previous: &Configuration) {
        self.path = previous.path.clone();
        self.module = previous.module.clone();
        self.svc.args = previous.svc.args.clone();
        self.svc.boot_time = previous.svc.boot_time;
        self.node.instance_id = previous.node.instance_id.clone();
    }

    /// Certificate files of the enabled roles, server certificates first.
    pub fn certificate_files(&self) -> Vec<String> {
        let mut files = Vec::new();
        if self.https.enabled {
            files.push(self.https.cert.server.file.clone());
        }
        if self.cloud.enabled {
            files.push(self.cloud.cert.server.file.clone());
        }
        if self.node.enabled {
            files.push(self.node.cert.server.file.clone());
        }
        if self.cloud.enabled {
            files.push(self.cloud.cert.ca.file.clone());
        }
        if self.node.enabled {
            files.push(self.node.cert.ca.file.clone());
        }
        files
    }
}
