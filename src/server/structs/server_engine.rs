use std::sync::Arc;
use crate::config::structs::config_store::ConfigStore;
use crate::roles::structs::server_options::ServerOptions;
use crate::routing::structs::router::Router;
use crate::server::structs::listener::Listener;
use crate::server::traits::gateway_handler::GatewayHandler;
use crate::websocket::structs::channel_registry::ChannelRegistry;

pub struct ServerEngine {
    pub(crate) config: Arc<ConfigStore>,
    pub(crate) handler: Arc<dyn GatewayHandler>,
    pub(crate) options: ServerOptions,
    pub(crate) router: Arc<Router>,
    pub(crate) channels: Arc<ChannelRegistry>,
    pub(crate) listeners: Vec<Listener>,
    pub(crate) interactive: bool,
}
