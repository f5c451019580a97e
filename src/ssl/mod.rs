//! SSL/TLS certificate module.
//!
//! Derives the certificate paths of every TLS role from the root folder and
//! loads the PEM material into rustls server configurations.
//!
//! # Roles
//!
//! | role  | server certificate      | CA certificate     |
//! |-------|-------------------------|--------------------|
//! | https | `<root>/crt/server.pfx` | none               |
//! | cloud | `<root>/crt/cloud.pfx`  | `<root>/crt/ca.crt` |
//! | node  | `<root>/crt/node.pfx`   | `<root>/crt/ca.crt` |
//!
//! Explicitly configured paths always win, and disabled roles are never
//! resolved.
//!
//! # Example
//!
//! ```rust,ignore
//! use secure_gateway::ssl::enums::server_role::ServerRole;
//! use secure_gateway::ssl::ssl::bind_certificates;
//!
//! let binding = bind_certificates(ServerRole::Cloud, true, "", "", root);
//! assert!(binding.server.ends_with("cloud.pfx"));
//! ```

/// Certificate error and role enumerations.
pub mod enums;

/// Certificate binding structure.
pub mod structs;

/// Implementation blocks for the role enumeration.
pub mod impls;

/// Binding and loading functions.
#[allow(clippy::module_inception)]
pub mod ssl;

/// Unit tests for certificate binding and loading.
pub mod tests;
