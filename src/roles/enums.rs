/// Role construction errors.
pub mod role_error;

/// Cloud and node.
pub mod role_kind;
