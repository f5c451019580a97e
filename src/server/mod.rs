//! Server engine and the gateway handler it drives.
//!
//! [`ServerEngine`](structs::server_engine::ServerEngine) is the composition
//! root of a running gateway. On construction it asks the
//! [`GatewayHandler`](traits::gateway_handler::GatewayHandler) which optional
//! roles to serve, creates the single channel registry and lets the handler
//! mount the roles on the shared router. It then loads the TLS material of
//! every enabled listener:
//!
//! | listener | certificate        | client certificates |
//! |----------|--------------------|---------------------|
//! | HTTP     | none               | no                  |
//! | HTTPS    | `https.cert.server`| no                  |
//! | CLOUD    | `cloud.cert.server`| optional, `cloud.cert.ca` |
//!
//! All listeners serve the same application: the routing middleware first,
//! then the router, then the site index.
//!
//! The module also carries the process-level collaborators: forwarding the
//! service verbs to `systemctl` ([`ServiceControl`](structs::service_control::ServiceControl))
//! and bundling the binary with its configuration ([`Packager`](structs::packager::Packager)).

/// Server and service error enumerations, service verbs.
pub mod enums;

/// Engine, gateway handler and service structures.
pub mod structs;

/// Implementation blocks for the server structures.
pub mod impls;

/// Routing callback contract of the engine.
pub mod traits;

/// Listener construction and site handlers.
#[allow(clippy::module_inception)]
pub mod server;
