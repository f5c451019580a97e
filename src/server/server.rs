use std::path::PathBuf;
use std::sync::Arc;
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::header::ContentType;
use actix_web::middleware::from_fn;
use actix_web::web::{self, Data, ServiceConfig};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer};
use log::{debug, info};
use crate::routing::routing::{routing_middleware, WEB_PATH};
use crate::routing::structs::router::Router;
use crate::routing::types::PreHandle;
use crate::server::enums::server_error::ServerError;
use crate::server::structs::listener::Listener;
use crate::server::traits::gateway_handler::GatewayHandler;

pub const BIND_ADDRESS: &str = "0.0.0.0";

/// Hook run before every role route when the embedder supplies none.
pub fn default_pre_handle() -> PreHandle
{
    Arc::new(|request: &HttpRequest| {
        debug!("[PRE-HANDLE] {} {}", request.method(), request.path());
        None
    })
}

pub fn gateway_service_routes(router: Arc<Router>, site_index: PathBuf) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        router.configure(cfg);
        cfg.app_data(Data::new(site_index.clone()));
        cfg.service(web::resource(format!("{WEB_PATH}/")).route(web::get().to(gateway_site_index)));
        cfg.default_service(web::route().to(gateway_not_found));
    })
}

/// Binds one listener. The returned server has to be awaited to run.
pub fn gateway_service(
    listener: Listener,
    handler: Arc<dyn GatewayHandler>,
    router: Arc<Router>,
    site_index: PathBuf,
) -> Result<(ServerHandle, Server), ServerError>
{
    let factory = move || {
        App::new()
            .wrap(from_fn(routing_middleware))
            .app_data(Data::from(handler.clone()))
            .configure(gateway_service_routes(router.clone(), site_index.clone()))
    };

    let server = match listener.tls {
        None => {
            info!("[{}] Starting server listener on {}:{}", listener.name, BIND_ADDRESS, listener.port);
            HttpServer::new(factory).bind((BIND_ADDRESS, listener.port))?
        }
        Some(tls) => {
            info!("[{}] Starting server listener with SSL on {}:{}", listener.name, BIND_ADDRESS, listener.port);
            HttpServer::new(factory).bind_rustls_0_23((BIND_ADDRESS, listener.port), tls)?
        }
    }
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn gateway_site_index(index: Data<PathBuf>) -> HttpResponse
{
    match tokio::fs::read(index.get_ref()).await {
        Ok(body) => HttpResponse::Ok().content_type(ContentType::html()).body(body),
        Err(_) => gateway_not_found().await
    }
}

pub async fn gateway_not_found() -> HttpResponse
{
    HttpResponse::NotFound().content_type(ContentType::plaintext()).body("Not Found")
}
