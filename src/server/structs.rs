/// The handler wiring the preprocessor and the roles.
pub mod gateway;

/// A bound address and its optional TLS configuration.
pub mod listener;

/// The composition root.
pub mod server_engine;

/// systemd unit management.
pub mod service_control;

/// Binary and configuration bundling.
pub mod packager;
