pub mod server_role;
