use std::sync::Arc;
use crate::routing::types::PreHandle;

/// State attached to a role's scope.
pub struct RoleRouteData<R: ?Sized> {
    pub role: Arc<R>,
    pub pre_handle: PreHandle,
    pub extra: Option<PreHandle>,
}
