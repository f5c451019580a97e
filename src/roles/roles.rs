use std::path::Path;
use std::sync::Arc;
use actix_web::web::{self, Data};
use actix_web::{Error, HttpRequest, HttpResponse};
use log::info;
use crate::config::structs::config_store::ConfigStore;
use crate::roles::enums::role_error::RoleError;
use crate::roles::enums::role_kind::RoleKind;
use crate::roles::structs::cloud_handler::CloudHandler;
use crate::roles::structs::node_handler::NodeHandler;
use crate::roles::structs::role_route_data::RoleRouteData;
use crate::roles::traits::routable_role::RoutableRole;
use crate::routing::types::PreHandle;
use crate::websocket::structs::channel_registry::ChannelRegistry;
use crate::websocket::websocket::channel_service;

pub fn require_certificate(role: RoleKind, path: &str) -> Result<(), RoleError>
{
    if path.is_empty() || !Path::new(path).is_file() {
        return Err(RoleError::CertificateMissing { role, path: path.to_string() });
    }
    Ok(())
}

pub fn role_port(role: RoleKind, port: i32) -> Result<u16, RoleError>
{
    match u16::try_from(port) {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(RoleError::InvalidPort { role, port })
    }
}

/// Constructs a handler for every enabled role, cloud first.
///
/// All handlers share `config` and `channels`; the cloud role receives
/// `cloud_extra` as its own pre-handle hook.
pub fn build_roles(
    config: Arc<ConfigStore>,
    channels: Arc<ChannelRegistry>,
    cloud_extra: Option<PreHandle>,
) -> Result<Vec<Arc<dyn RoutableRole>>, RoleError>
{
    let (cloud_enabled, node_enabled) = {
        let cfg = config.read();
        (cfg.cloud.enabled, cfg.node.enabled)
    };

    let mut roles: Vec<Arc<dyn RoutableRole>> = Vec::new();
    if cloud_enabled {
        roles.push(Arc::new(CloudHandler::new(config.clone(), channels.clone(), cloud_extra)?));
        info!("[ROLES] Cloud role constructed");
    }
    if node_enabled {
        roles.push(Arc::new(NodeHandler::new(config.clone(), channels.clone())?));
        info!("[ROLES] Node role constructed");
    }
    Ok(roles)
}

pub async fn role_info<R: RoutableRole>(request: HttpRequest, data: Data<RoleRouteData<R>>) -> HttpResponse
{
    if let Some(response) = data.pre_check(&request) {
        return response;
    }
    HttpResponse::Ok().json(data.role.info())
}

pub async fn role_channel<R: RoutableRole>(request: HttpRequest, stream: web::Payload, data: Data<RoleRouteData<R>>) -> Result<HttpResponse, Error>
{
    if let Some(response) = data.pre_check(&request) {
        return Ok(response);
    }
    channel_service(&request, stream, data.role.kind(), data.role.channels())
}
