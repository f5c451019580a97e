use std::sync::Arc;
use uuid::Uuid;
use crate::roles::enums::role_kind::RoleKind;
use crate::websocket::structs::channel_registry::ChannelRegistry;

pub struct ChannelConnection {
    pub(crate) id: Option<Uuid>,
    pub(crate) role: RoleKind,
    pub(crate) registry: Arc<ChannelRegistry>,
}
