use actix_web::web::ServiceConfig;
use log::{info, warn};
use crate::routing::structs::router::{RouteRegistration, Router};
use crate::routing::types::RouteConfigure;

impl Router {
    pub fn new() -> Router {
        Router::default()
    }

    /// Adds a scope. A prefix that is already taken keeps its first
    /// registration and `false` is returned.
    pub fn register(&mut self, prefix: &str, configure: RouteConfigure) -> bool {
        if self.routes.iter().any(|route| route.prefix == prefix) {
            warn!("[ROUTER] Prefix {} already registered, ignoring later registration", prefix);
            return false;
        }
        info!("[ROUTER] Registered {}", prefix);
        self.routes.push(RouteRegistration {
            prefix: prefix.to_string(),
            configure,
        });
        true
    }

    pub fn prefixes(&self) -> Vec<&str> {
        self.routes.iter().map(|route| route.prefix.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn configure(&self, cfg: &mut ServiceConfig) {
        for route in &self.routes {
            (route.configure)(cfg);
        }
    }
}
