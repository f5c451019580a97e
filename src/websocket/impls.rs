pub mod channel_registry;
pub mod channel_connection;
