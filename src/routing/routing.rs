use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN};
use actix_web::http::{Method, StatusCode};
use actix_web::middleware::Next;
use actix_web::web::Data;
use actix_web::Error;
use crate::routing::structs::request_context::RequestContext;
use crate::server::traits::gateway_handler::GatewayHandler;

/// Mount path of the operator web UI.
pub const WEB_PATH: &str = "/opt";

/// Base path under which the optional roles mount their scopes.
pub const API_PATH: &str = "/opt/api";

pub const ALLOWED_HEADERS: &str = "content-type,token";

/// Stateless pre-dispatch filter.
///
/// `OPTIONS` requests on any path are answered as CORS preflights. A `GET`
/// of `""`, `"/"` or `web_path` is redirected permanently to the web UI.
/// Anything else is left for route dispatch.
pub fn before_routing(context: &mut RequestContext, web_path: &str)
{
    if context.method() == Method::OPTIONS {
        context.add_header(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        context.set_header(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOWED_HEADERS));
        context.set_handled(true);
        return;
    }

    if context.method() == Method::GET {
        let path = context.path();
        if path.is_empty() || path == "/" || path == web_path {
            let location = format!("{}://{}{}/", context.scheme(), context.host(), web_path);
            context.redirect(&location, StatusCode::MOVED_PERMANENTLY);
            context.set_handled(true);
        }
    }
}

/// Runs the gateway handler's routing hooks around every request.
///
/// Installed with `actix_web::middleware::from_fn`. The handler is looked up
/// as `Data<dyn GatewayHandler>`; without one requests pass straight through.
pub async fn routing_middleware<B>(request: ServiceRequest, next: Next<B>) -> Result<ServiceResponse<EitherBody<B>>, Error>
where
    B: MessageBody + 'static,
{
    let handler = match request.app_data::<Data<dyn GatewayHandler>>() {
        None => {
            return next.call(request).await.map(|response| response.map_into_left_body());
        }
        Some(handler) => handler.clone()
    };

    let mut context = RequestContext::from_request(request.request());
    handler.before_routing(&mut context);
    if context.handled() {
        let response = context.to_response();
        return Ok(request.into_response(response).map_into_right_body());
    }

    let response = next.call(request).await?;
    handler.after_routing(&context);
    Ok(response.map_into_left_body())
}
