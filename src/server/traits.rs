/// Callbacks the engine invokes around routing.
pub mod gateway_handler;
