/// Resolved server and CA certificate paths.
pub mod certificate_binding;
