use std::sync::Arc;
use actix_web::web::{self, Data, ServiceConfig};
use crate::config::structs::config_store::ConfigStore;
use crate::roles::enums::role_error::RoleError;
use crate::roles::enums::role_kind::RoleKind;
use crate::roles::roles::{require_certificate, role_channel, role_info, role_port};
use crate::roles::structs::cloud_handler::CloudHandler;
use crate::roles::structs::role_info::RoleInfo;
use crate::roles::structs::role_route_data::RoleRouteData;
use crate::roles::traits::routable_role::RoutableRole;
use crate::routing::structs::route_path::RoutePath;
use crate::routing::structs::router::Router;
use crate::routing::types::PreHandle;
use crate::websocket::structs::channel_registry::ChannelRegistry;

impl CloudHandler {
    /// Fails when the resolved certificates are missing on disk or the
    /// configured port does not fit a socket port.
    pub fn new(config: Arc<ConfigStore>, channels: Arc<ChannelRegistry>, extra: Option<PreHandle>) -> Result<CloudHandler, RoleError> {
        let port = {
            let cfg = config.read();
            require_certificate(RoleKind::Cloud, &cfg.cloud.cert.server.file)?;
            require_certificate(RoleKind::Cloud, &cfg.cloud.cert.ca.file)?;
            role_port(RoleKind::Cloud, cfg.cloud.port)?
        };
        Ok(CloudHandler {
            config,
            channels,
            extra,
            port,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl RoutableRole for CloudHandler {
    fn kind(&self) -> RoleKind {
        RoleKind::Cloud
    }

    fn register_routes(self: Arc<Self>, router: &mut Router, path: &RoutePath, pre_handle: PreHandle) -> bool {
        let scope = path.join(self.kind().segment());
        let data = Data::new(RoleRouteData {
            extra: self.extra.clone(),
            role: self,
            pre_handle,
        });
        let prefix = scope.clone();
        router.register(&prefix, Arc::new(move |cfg: &mut ServiceConfig| {
            cfg.service(
                web::scope(&scope)
                    .app_data(data.clone())
                    .route("/info", web::get().to(role_info::<CloudHandler>))
                    .route("/channel", web::get().to(role_channel::<CloudHandler>))
            );
        }))
    }

    fn info(&self) -> RoleInfo {
        let cfg = self.config.read();
        RoleInfo {
            role: RoleKind::Cloud,
            module: cfg.module.name.clone(),
            version: cfg.module.version.clone(),
            instance_id: cfg.node.instance_id.clone(),
            port: self.port,
            channels: self.channels.count(RoleKind::Cloud),
            cloud_server: None,
        }
    }

    fn channels(&self) -> Arc<ChannelRegistry> {
        self.channels.clone()
    }
}
