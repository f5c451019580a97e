/// Capability shared by the cloud and node roles.
pub mod routable_role;
