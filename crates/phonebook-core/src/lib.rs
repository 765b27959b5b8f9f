//! Directory engine and configuration for the phonebook service.
//!
//! The engine sits between the query surface and storage:
//!
//! ```text
//! Query surface --> Directory (validation, uniqueness, filters) --> PersonStore
//! ```
//!
//! # Modules
//!
//! - [`directory`] -- [`Directory`] engine and the address projection
//! - [`error`] -- [`DirectoryError`] and its [`ErrorKind`] discriminant
//! - [`config`] -- Configuration loading from `phonebook-config.yaml` into
//!   strongly-typed structs

pub mod config;
pub mod directory;
pub mod error;

// Re-export primary types for convenience.
pub use config::{BackendKind, ConfigError, DirectoryConfig, StorageConfig};
pub use directory::{Directory, resolve_address};
pub use error::{DirectoryError, ErrorKind};
