use std::sync::Arc;
use log::{info, warn};
use crate::config::structs::config_store::ConfigStore;
use crate::roles::enums::role_error::RoleError;
use crate::roles::roles::build_roles;
use crate::roles::structs::server_options::ServerOptions;
use crate::routing::routing::{before_routing, WEB_PATH};
use crate::routing::structs::request_context::RequestContext;
use crate::routing::structs::route_path::RoutePath;
use crate::routing::structs::router::Router;
use crate::routing::types::PreHandle;
use crate::server::structs::gateway::Gateway;
use crate::server::traits::gateway_handler::GatewayHandler;
use crate::websocket::structs::channel_registry::ChannelRegistry;

impl Gateway {
    pub fn new(config: Arc<ConfigStore>) -> Gateway {
        Gateway {
            config,
            web_path: WEB_PATH.to_string(),
        }
    }

    pub fn web_path(&self) -> &str {
        &self.web_path
    }
}

impl GatewayHandler for Gateway {
    fn before_routing(&self, context: &mut RequestContext) {
        before_routing(context, &self.web_path);
    }

    fn extend_opt_setup(&self, options: Option<&mut ServerOptions>) {
        let Some(options) = options else {
            return;
        };
        let config = self.config.read();
        options.set_cloud(config.cloud.enabled);
        options.set_node(config.node.enabled);
    }

    fn extend_opt_api(
        &self,
        router: &mut Router,
        path: &RoutePath,
        pre_handle: PreHandle,
        channels: Arc<ChannelRegistry>,
    ) -> Result<(), RoleError> {
        for role in build_roles(self.config.clone(), channels, None)? {
            let kind = role.kind();
            if role.register_routes(router, path, pre_handle.clone()) {
                info!("[GATEWAY] {} role mounted below {}", kind, path.prefix());
            } else {
                warn!("[GATEWAY] {} role routes conflict with an earlier registration", kind);
            }
        }
        Ok(())
    }
}
