pub mod gateway;
pub mod listener;
pub mod server_engine;
pub mod service_action;
pub mod service_control;
pub mod packager;
