//! # Secure Gateway
//!
//! Bootstrap and request preprocessing of a security gateway built on
//! Actix-web and rustls.
//!
//! ## Overview
//!
//! The gateway serves a local web front end and two optional peer roles over
//! TLS. The **cloud** role accepts node peers on its own port; the **node**
//! role is configured with the cloud server it belongs to. Both roles share
//! one router, one pre-handle hook and one websocket channel registry.
//!
//! The process can run interactively or be installed as a systemd service.
//!
//! ## Startup
//!
//! 1. The configuration is loaded from `<root>/cfg/<name>.json` (or created
//!    there) and every blank field is resolved from the root folder.
//! 2. Role certificates are bound to `<root>/crt/<role>.pfx` and
//!    `<root>/crt/ca.crt` for enabled roles without explicit paths.
//! 3. The [`ServerEngine`](server::structs::server_engine::ServerEngine)
//!    asks the gateway handler which roles to serve and lets it mount them.
//! 4. Every request passes the routing preprocessor: `OPTIONS` preflights
//!    are answered directly, `GET /` is redirected to the web UI.
//!
//! ## Modules
//!
//! - [`common`] - Logging setup, root folder discovery and small helpers
//! - [`config`] - Configuration model, JSON persistence and default resolution
//! - [`roles`] - Cloud and node role handlers
//! - [`routing`] - Request context, preprocessor middleware and shared router
//! - [`server`] - Server engine, gateway handler, service control and packaging
//! - [`ssl`] - Certificate binding and rustls configuration
//! - [`structs`] - CLI argument parsing
//! - [`websocket`] - Shared channel registry and websocket actors

/// Common utilities and shared functionality.
///
/// Contains logging setup, root folder discovery, GUID generation and the
/// ad-hoc error type used across modules.
pub mod common;

/// Configuration management module.
///
/// Handles loading, resolving and persisting the JSON configuration.
pub mod config;

/// Optional peer roles.
///
/// The cloud and node handlers, the trait they share and the options that
/// switch them on.
pub mod roles;

/// Request routing plumbing.
///
/// Preflight and redirect handling, the shared router and the base path
/// roles mount below.
pub mod routing;

/// Server engine module.
///
/// Wires the gateway handler, binds the HTTP, HTTPS and cloud listeners and
/// forwards lifecycle verbs to the service manager.
pub mod server;

/// SSL/TLS certificate module.
///
/// Binds role certificate paths and turns PEM bundles into rustls server
/// configurations.
pub mod ssl;

/// CLI argument parsing.
pub mod structs;

/// WebSocket channel module.
///
/// The registry shared by both roles and the actor serving one channel.
pub mod websocket;
