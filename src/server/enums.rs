/// Errors raised while constructing or running the engine.
pub mod server_error;

/// Lifecycle verbs accepted on the command line.
pub mod service_action;

/// Errors raised by service control and packaging.
pub mod service_error;
