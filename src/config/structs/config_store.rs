use std::path::PathBuf;
use parking_lot::RwLock;
use crate::config::structs::configuration::Configuration;

/// Owner of the process configuration and of the file it persists to.
///
/// Readers take the shared lock; [`ConfigStore::load`] holds the exclusive
/// lock for the whole read-parse-resolve-replace sequence so no request ever
/// observes a half reloaded configuration.
#[derive(Debug)]
pub struct ConfigStore {
    pub(crate) path: PathBuf,
    pub(crate) root: PathBuf,
    pub(crate) config: RwLock<Configuration>,
}
