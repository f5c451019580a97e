use std::path::{Path, PathBuf};
use log::info;
use parking_lot::{RwLockReadGuard, RwLockWriteGuard};
use parking_lot::RwLock;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::config_store::ConfigStore;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::module_config::ModuleConfig;

impl ConfigStore {
    /// Loads `path`, or generates and persists a fresh configuration when
    /// the file does not exist yet. Either way the in-memory result is
    /// resolved against `root`.
    pub fn open(path: &Path, root: &Path, module: ModuleConfig) -> Result<ConfigStore, ConfigurationError> {
        let exists = path.exists();
        let mut config = if exists {
            Configuration::load_file(path)?
        } else {
            Configuration::init()
        };
        config.path = path.to_path_buf();
        config.module = module;
        config.resolve(root);

        if !exists {
            config.save_file(path)?;
        }

        Ok(ConfigStore {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
            config: RwLock::new(config),
        })
    }

    pub fn from_config(path: PathBuf, root: PathBuf, config: Configuration) -> ConfigStore {
        ConfigStore {
            path,
            root,
            config: RwLock::new(config),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Configuration> {
        self.config.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Configuration> {
        self.config.write()
    }

    pub fn snapshot(&self) -> Configuration {
        self.config.read().clone()
    }

    /// Re-reads the file and replaces the configuration in place.
    pub fn load(&self) -> Result<(), ConfigurationError> {
        let mut config = self.config.write();
        let mut reloaded = Configuration::load_file(&self.path)?;
        reloaded.carry_runtime(&config);
        reloaded.resolve(&self.root);
        *config = reloaded;
        info!("[CONFIG] Reloaded from {}", self.path.display());
        Ok(())
    }

    /// Writes the file under the write lock so saves never interleave.
    pub fn save(&self) -> Result<(), ConfigurationError> {
        let config = self.config.write();
        config.save_file(&self.path)?;
        info!("[CONFIG] Saved to {}", self.path.display());
        Ok(())
    }
}
