use crate::routing::types::RouteConfigure;

pub struct RouteRegistration {
    pub prefix: String,
    pub configure: RouteConfigure,
}

/// Routing table shared by every role.
///
/// Roles register their scopes once at startup; every server worker then
/// applies the same registrations to its `App`.
#[derive(Default)]
pub struct Router {
    pub(crate) routes: Vec<RouteRegistration>,
}
