/// Per-request routing context.
pub mod request_context;

/// Shared routing table.
pub mod router;

/// Base path of role scopes.
pub mod route_path;
