/// Shared registry of live channels.
pub mod channel_registry;

/// Websocket actor backing one channel.
pub mod channel_connection;
