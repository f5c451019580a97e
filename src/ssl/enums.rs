/// Errors raised while reading TLS material.
pub mod certificate_error;

/// HTTPS site, cloud and node roles.
pub mod server_role;
