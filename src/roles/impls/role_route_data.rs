use actix_web::{HttpRequest, HttpResponse};
use crate::roles::structs::role_route_data::RoleRouteData;

impl<R: ?Sized> RoleRouteData<R> {
    /// Runs the shared pre-handle hook, then the role's own one.
    pub fn pre_check(&self, request: &HttpRequest) -> Option<HttpResponse> {
        if let Some(response) = (self.pre_handle)(request) {
            return Some(response);
        }
        match &self.extra {
            None => None,
            Some(extra) => extra(request)
        }
    }
}
