use std::sync::Arc;
use actix_web::web::ServiceConfig;
use actix_web::{HttpRequest, HttpResponse};

/// Cross-cutting check run before every role route. Returning a response
/// ends the request with it.
pub type PreHandle = Arc<dyn Fn(&HttpRequest) -> Option<HttpResponse> + Send + Sync>;

pub type RouteConfigure = Arc<dyn Fn(&mut ServiceConfig) + Send + Sync>;
