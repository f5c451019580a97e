//! Optional cloud and node roles.
//!
//! Both roles implement [`RoutableRole`](traits::routable_role::RoutableRole)
//! and are constructed only when enabled in the configuration. Each gets
//! the shared configuration store and the shared channel registry, and
//! mounts one scope on the shared router below the API base path:
//!
//! - `/opt/api/cloud/info`, `/opt/api/cloud/channel`
//! - `/opt/api/node/info`, `/opt/api/node/channel`
//!
//! Every role route runs the shared pre-handle hook before doing any work.
//! Construction fails when a role's certificates are missing on disk, which
//! aborts startup.

/// Role kind and error enumerations.
pub mod enums;

/// Role handlers, options and route state.
pub mod structs;

/// Implementation blocks for the role structures.
pub mod impls;

/// The routable role capability.
pub mod traits;

/// Role construction and shared route handlers.
#[allow(clippy::module_inception)]
pub mod roles;

/// Unit tests for role construction and routing.
pub mod tests;
