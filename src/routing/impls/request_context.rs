use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue, HOST, LOCATION};
use actix_web::http::{Method, StatusCode};
use actix_web::{HttpRequest, HttpResponse};
use crate::routing::structs::request_context::RequestContext;

impl RequestContext {
    pub fn new(method: Method, scheme: &str, host: &str, path: &str) -> RequestContext {
        RequestContext {
            method,
            path: path.to_string(),
            scheme: scheme.to_string(),
            host: host.to_string(),
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            handled: false,
        }
    }

    /// Scheme comes from the listener, host from the `Host` header. Forwarding
    /// headers sent by the client are ignored.
    pub fn from_request(request: &HttpRequest) -> RequestContext {
        let scheme = if request.app_config().secure() { "https" } else { "http" };
        let host = request.headers()
            .get(HOST)
            .and_then(|value| value.to_str().ok())
            .or_else(|| request.uri().authority().map(|authority| authority.as_str()))
            .unwrap_or_else(|| request.app_config().host());
        RequestContext::new(
            request.method().clone(),
            scheme,
            host,
            request.path(),
        )
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn add_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.append(name, value);
    }

    pub fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    /// Prepares a redirect response. A location that is not a valid header
    /// value turns the response into a 400.
    pub fn redirect(&mut self, location: &str, status: StatusCode) {
        match HeaderValue::from_str(location) {
            Ok(value) => {
                self.set_header(LOCATION, value);
                self.status = status;
            }
            Err(_) => {
                self.status = StatusCode::BAD_REQUEST;
            }
        }
    }

    pub fn set_handled(&mut self, handled: bool) {
        self.handled = handled;
    }

    pub fn handled(&self) -> bool {
        self.handled
    }

    pub fn to_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status);
        for (name, value) in self.headers.iter() {
            builder.append_header((name.clone(), value.clone()));
        }
        builder.finish()
    }
}
