/// Cloud role handler.
pub mod cloud_handler;

/// Node role handler.
pub mod node_handler;

/// JSON facts served by each role.
pub mod role_info;

/// Scope state of a role.
pub mod role_route_data;

/// Advertised optional roles.
pub mod server_options;
