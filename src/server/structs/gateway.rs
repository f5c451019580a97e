use std::sync::Arc;
use crate::config::structs::config_store::ConfigStore;

/// Default [`GatewayHandler`](crate::server::traits::gateway_handler::GatewayHandler):
/// preflight and redirect handling plus cloud and node role wiring.
pub struct Gateway {
    pub(crate) config: Arc<ConfigStore>,
    pub(crate) web_path: String,
}
