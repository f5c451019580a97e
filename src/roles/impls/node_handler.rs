use std::sync::Arc;
use actix_web::web::{self, Data, ServiceConfig};
use crate::config::structs::config_store::ConfigStore;
use crate::roles::enums::role_error::RoleError;
use crate::roles::enums::role_kind::RoleKind;
use crate::roles::roles::{require_certificate, role_channel, role_info, role_port};
use crate::roles::structs::node_handler::NodeHandler;
use crate::roles::structs::role_info::RoleInfo;
use crate::roles::structs::role_route_data::RoleRouteData;
use crate::roles::traits::routable_role::RoutableRole;
use crate::routing::structs::route_path::RoutePath;
use crate::routing::structs::router::Router;
use crate::routing::types::PreHandle;
use crate::websocket::structs::channel_registry::ChannelRegistry;

impl NodeHandler {
    pub fn new(config: Arc<ConfigStore>, channels: Arc<ChannelRegistry>) -> Result<NodeHandler, RoleError> {
        let (cloud_address, cloud_port) = {
            let cfg = config.read();
            require_certificate(RoleKind::Node, &cfg.node.cert.server.file)?;
            require_certificate(RoleKind::Node, &cfg.node.cert.ca.file)?;
            (cfg.node.cloud_server.address.clone(), role_port(RoleKind::Node, cfg.node.cloud_server.port)?)
        };
        Ok(NodeHandler {
            config,
            channels,
            cloud_address,
            cloud_port,
        })
    }

    /// `address:port` of the cloud role, if an address is configured.
    pub fn cloud_server(&self) -> Option<String> {
        if self.cloud_address.trim().is_empty() {
            return None;
        }
        Some(format!("{}:{}", self.cloud_address, self.cloud_port))
    }
}

impl RoutableRole for NodeHandler {
    fn kind(&self) -> RoleKind {
        RoleKind::Node
    }

    fn register_routes(self: Arc<Self>, router: &mut Router, path: &RoutePath, pre_handle: PreHandle) -> bool {
        let scope = path.join(self.kind().segment());
        let data = Data::new(RoleRouteData {
            role: self,
            pre_handle,
            extra: None,
        });
        let prefix = scope.clone();
        router.register(&prefix, Arc::new(move |cfg: &mut ServiceConfig| {
            cfg.service(
                web::scope(&scope)
                    .app_data(data.clone())
                    .route("/info", web::get().to(role_info::<NodeHandler>))
                    .route("/channel", web::get().to(role_channel::<NodeHandler>))
            );
        }))
    }

    fn info(&self) -> RoleInfo {
        let cfg = self.config.read();
        RoleInfo {
            role: RoleKind::Node,
            module: cfg.module.name.clone(),
            version: cfg.module.version.clone(),
            instance_id: cfg.node.instance_id.clone(),
            port: self.cloud_port,
            channels: self.channels.count(RoleKind::Node),
            cloud_server: self.cloud_server(),
        }
    }

    fn channels(&self) -> Arc<ChannelRegistry> {
        self.channels.clone()
    }
}
