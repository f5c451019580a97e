//! Configuration data structures.
//!
//! Each struct corresponds to a section of the JSON configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Module identity (type, name, version, remark, install path).
pub mod module_config;

/// Log folder and level.
pub mod log_config;

/// Service name and runtime service facts.
pub mod svc_config;

/// Plain HTTP site listener.
pub mod http_config;

/// HTTPS site listener and its server certificate.
pub mod https_config;

/// Certificate file references shared by the TLS roles.
pub mod certificate_config;

/// Cloud role listener, server and CA certificate.
pub mod cloud_config;

/// Node role certificates and target cloud server.
pub mod node_config;

/// Site content folders.
pub mod site_config;

/// System service folders.
pub mod sys_config;

/// Lock-guarded configuration bound to its file.
pub mod config_store;
