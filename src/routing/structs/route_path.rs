/// Base path under which roles mount their scopes.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RoutePath {
    pub(crate) prefix: String,
}
