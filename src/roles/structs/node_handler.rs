use std::sync::Arc;
use crate::config::structs::config_store::ConfigStore;
use crate::websocket::structs::channel_registry::ChannelRegistry;

/// Node role: the side that dials out to a cloud role.
pub struct NodeHandler {
    pub(crate) config: Arc<ConfigStore>,
    pub(crate) channels: Arc<ChannelRegistry>,
    pub(crate) cloud_address: String,
    pub(crate) cloud_port: u16,
}
