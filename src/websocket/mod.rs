//! Websocket channels shared by the cloud and node roles.
//!
//! One [`ChannelRegistry`](structs::channel_registry::ChannelRegistry) is
//! created by the server engine at startup and handed to every role. Each
//! upgraded websocket becomes a
//! [`ChannelConnection`](structs::channel_connection::ChannelConnection)
//! actor that registers itself on start and removes itself on stop.
//!
//! # Architecture
//!
//! ```text
//!   cloud role ──┐                 ┌── channel (cloud)
//!                ├── registry ─────┼── channel (node)
//!   node role ───┘                 └── channel (cloud)
//! ```
//!
//! Insert, remove and broadcast are serialised by the registry's lock, so
//! a broadcast never races a channel joining or leaving.

/// Registry and connection structures.
pub mod structs;

/// Implementation blocks for the registry and the channel actor.
pub mod impls;

/// Websocket upgrade entry point.
#[allow(clippy::module_inception)]
pub mod websocket;

/// Unit tests for the channel registry.
pub mod tests;
