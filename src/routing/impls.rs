pub mod request_context;
pub mod router;
pub mod route_path;
