//! Configuration management module.
//!
//! This module handles loading, resolving and persisting the gateway
//! configuration. The file is JSON and lives at `<root>/cfg/<module>.json`
//! unless overridden on the command line.
//!
//! # Configuration Structure
//!
//! - **module**: identity of the running binary (overwritten on every start)
//! - **log**: log folder and level
//! - **svc**: service name used by the service manager
//! - **http** / **https**: site listeners
//! - **cloud**: cloud role listener and certificates
//! - **node**: node role certificates and the cloud server it dials
//! - **site**: content folders
//! - **sys**: custom service folders
//!
//! # Resolution
//!
//! Every field left blank (empty string or non-positive port) is filled
//! from the root folder, the folder holding the executable:
//!
//! - certificates: `<root>/crt/<role>.pfx`, CA: `<root>/crt/ca.crt`
//! - site content: `<root>/site/{root,doc,opt}`
//! - custom services: `<root>/svc/custom`, `<root>/log/svc/custom`
//! - cloud ports: `6931`
//!
//! # Example
//!
//! ```rust,ignore
//! use secure_gateway::config::structs::config_store::ConfigStore;
//!
//! let store = ConfigStore::open(&cfg_path, &root, module)?;
//! store.load()?; // reload under the write lock
//! store.save()?;
//! ```

/// Configuration error enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading, resolving and saving.
pub mod impls;
