pub mod cloud_handler;
pub mod node_handler;
pub mod role_kind;
pub mod role_route_data;
pub mod server_options;
