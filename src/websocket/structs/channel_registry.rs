use std::collections::HashMap;
use parking_lot::RwLock;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;
use crate::roles::enums::role_kind::RoleKind;

/// Text frame queued for one live channel.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ChannelMessage(pub String);

#[derive(Debug)]
pub struct Channel {
    pub role: RoleKind,
    pub sender: UnboundedSender<ChannelMessage>,
}

/// Live websocket channels of every role, keyed by channel id.
#[derive(Debug, Default)]
pub struct ChannelRegistry {
    pub(crate) channels: RwLock<HashMap<Uuid, Channel>>,
}
