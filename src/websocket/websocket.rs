use std::sync::Arc;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use crate::roles::enums::role_kind::RoleKind;
use crate::websocket::structs::channel_connection::ChannelConnection;
use crate::websocket::structs::channel_registry::ChannelRegistry;

/// Upgrades the request and joins the new channel to `registry`.
pub fn channel_service(
    request: &HttpRequest,
    stream: web::Payload,
    role: RoleKind,
    registry: Arc<ChannelRegistry>,
) -> Result<HttpResponse, Error> {
    ws::start(ChannelConnection::new(role, registry), request, stream)
}
