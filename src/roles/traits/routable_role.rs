use std::sync::Arc;
use crate::roles::enums::role_kind::RoleKind;
use crate::roles::structs::role_info::RoleInfo;
use crate::routing::structs::route_path::RoutePath;
use crate::routing::structs::router::Router;
use crate::routing::types::PreHandle;
use crate::websocket::structs::channel_registry::ChannelRegistry;

pub trait RoutableRole: Send + Sync + 'static {
    fn kind(&self) -> RoleKind;

    /// Mounts the role's scope below `path`. Returns `false` when the scope
    /// prefix was already taken.
    fn register_routes(self: Arc<Self>, router: &mut Router, path: &RoutePath, pre_handle: PreHandle) -> bool;

    fn info(&self) -> RoleInfo;

    fn channels(&self) -> Arc<ChannelRegistry>;
}
