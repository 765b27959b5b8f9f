//! Storage backends for the phonebook directory.
//!
//! The directory engine talks to storage only through the [`PersonStore`]
//! capability. Three backends implement it:
//!
//! ```text
//! Directory engine
//!     |
//!     +-- PersonStore --+-- MemoryStore    (volatile Vec, reset on restart)
//!                       +-- RemoteStore    (read-only HTTP source)
//!                       +-- PgPersonStore  (PostgreSQL `people` table)
//! ```
//!
//! [`StoreBackend`] wraps whichever one the deployment configures.
//!
//! # Modules
//!
//! - [`store`] -- The `PersonStore` trait and `StoreBackend` dispatch
//! - [`memory`] -- In-memory backend
//! - [`remote`] -- Remote read-only backend over `reqwest`
//! - [`postgres`] -- `PostgreSQL` pool configuration and backend
//! - [`error`] -- Shared error types

pub mod error;
pub mod memory;
pub mod postgres;
pub mod remote;
pub mod store;

// Re-export primary types for convenience.
pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgres::{PgPersonStore, PostgresConfig};
pub use remote::{RemoteConfig, RemoteStore};
pub use store::{PersonStore, StoreBackend};
