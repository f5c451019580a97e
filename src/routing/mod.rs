//! Request routing plumbing shared by the site and the optional roles.
//!
//! Every inbound request passes [`routing_middleware`](routing::routing_middleware)
//! before it reaches a route. The middleware builds a
//! [`RequestContext`](structs::request_context::RequestContext) and hands it
//! to the gateway handler, which may answer the request on the spot:
//!
//! 1. `OPTIONS <any path>` → `200` with `Access-Control-Allow-Origin: *` and
//!    `Access-Control-Allow-Headers: content-type,token`
//! 2. `GET ""`, `GET /`, `GET /opt` → `301` to `<scheme>://<host>/opt/`
//!
//! Everything else reaches the scopes registered on the shared
//! [`Router`](structs::router::Router).

/// Routing context, router and base path structures.
pub mod structs;

/// Implementation blocks for the routing structures.
pub mod impls;

/// Hook and route registration type aliases.
pub mod types;

/// Preprocessor and middleware.
#[allow(clippy::module_inception)]
pub mod routing;
