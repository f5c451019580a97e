//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules of the gateway.
//!
//! # Utilities
//!
//! - Logging setup (`fern` dispatch with colored levels)
//! - Root folder detection from the running executable
//! - Instance identifier generation
//! - Time zone facts for the startup banner
//!
//! # Example
//!
//! ```rust,ignore
//! use secure_gateway::common::common::{module_root_folder, new_guid};
//!
//! let root = module_root_folder()?;
//! let instance_id = new_guid();
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Unit tests for the common helpers.
pub mod tests;
