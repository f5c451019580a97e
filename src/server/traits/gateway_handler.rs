use std::sync::Arc;
use crate::roles::enums::role_error::RoleError;
use crate::roles::structs::server_options::ServerOptions;
use crate::routing::structs::request_context::RequestContext;
use crate::routing::structs::route_path::RoutePath;
use crate::routing::structs::router::Router;
use crate::routing::types::PreHandle;
use crate::websocket::structs::channel_registry::ChannelRegistry;

/// Hooks the [`ServerEngine`](crate::server::structs::server_engine::ServerEngine)
/// calls on its handler.
///
/// `extend_opt_setup` and `extend_opt_api` run once at construction,
/// `before_routing` and `after_routing` once per request.
pub trait GatewayHandler: Send + Sync + 'static {
    fn init_routing(&self, _router: &mut Router) {}

    /// May answer the request by marking `context` handled.
    fn before_routing(&self, context: &mut RequestContext);

    fn after_routing(&self, _context: &RequestContext) {}

    /// Declares the optional roles to serve. `None` is a no-op.
    fn extend_opt_setup(&self, options: Option<&mut ServerOptions>);

    /// Constructs the enabled roles and mounts them below `path`.
    fn extend_opt_api(
        &self,
        router: &mut Router,
        path: &RoutePath,
        pre_handle: PreHandle,
        channels: Arc<ChannelRegistry>,
    ) -> Result<(), RoleError>;
}
