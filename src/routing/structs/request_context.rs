use actix_web::http::header::HeaderMap;
use actix_web::http::{Method, StatusCode};

/// Per-request view handed to the routing hooks.
///
/// Carries what the hooks may inspect (method, path, scheme, host) and the
/// response they may produce instead of route dispatch. A context is built
/// for one request and never shared.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) scheme: String,
    pub(crate) host: String,
    pub(crate) status: StatusCode,
    pub(crate) headers: HeaderMap,
    pub(crate) handled: bool,
}
