use std::sync::Arc;
use crate::config::structs::config_store::ConfigStore;
use crate::routing::types::PreHandle;
use crate::websocket::structs::channel_registry::ChannelRegistry;

/// Cloud role: accepts node peers on its own TLS port.
pub struct CloudHandler {
    pub(crate) config: Arc<ConfigStore>,
    pub(crate) channels: Arc<ChannelRegistry>,
    pub(crate) extra: Option<PreHandle>,
    pub(crate) port: u16,
}
