/// Defaults, JSON parsing and file persistence.
pub mod configuration;

/// Filling unset fields from the root folder.
pub mod configuration_resolver;

/// Locked load/save over the configuration file.
pub mod config_store;
