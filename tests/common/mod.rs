#![allow(dead_code)]
use std::path::Path;
use std::sync::Arc;
use secure_gateway::config::structs::config_store::ConfigStore;
use secure_gateway::config::structs::module_config::ModuleConfig;
use secure_gateway::ssl::ssl::generate_missing_certificates;

pub type TestStore = Arc<ConfigStore>;

pub fn test_module(root: &Path) -> ModuleConfig {
    ModuleConfig {
        module_type: String::from("server"),
        name: String::from("secure-gateway"),
        version: String::from("1.0.4"),
        remark: String::from("Security Gateway"),
        path: root.join("secure-gateway").display().to_string(),
    }
}

/// Writes `json` as the configuration file below `root` and opens it.
pub fn create_test_store(root: &Path, json: &str) -> TestStore {
    let path = root.join("cfg").join("secure-gateway.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, json).unwrap();
    Arc::new(ConfigStore::open(&path, root, test_module(root)).unwrap())
}

pub fn create_test_certificates(store: &ConfigStore) {
    let files = store.read().certificate_files();
    generate_missing_certificates(&files, vec![String::from("localhost")]).unwrap();
}

pub const WEBSOCKET_KEY: &str = "dGhlIHNhbXBsZSBub25jZQ==";
