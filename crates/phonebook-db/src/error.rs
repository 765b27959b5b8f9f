//! Error types for the storage layer.
//!
//! All errors are propagated via [`StoreError`] which wraps the underlying
//! [`sqlx`] and [`reqwest`] errors and adds the storage-boundary outcomes
//! the directory engine needs to tell apart (duplicate name, constraint
//! violation, unsupported operation).

use phonebook_types::FieldViolation;

/// Errors that can occur in a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The remote source could not be reached or returned an unreadable body.
    #[error("remote source error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote source answered with a non-success status.
    #[error("remote source error: {0}")]
    Remote(String),

    /// The backend does not implement this operation.
    #[error("{backend} backend does not support {operation}")]
    Unsupported {
        /// Backend name.
        backend: &'static str,
        /// Operation name.
        operation: &'static str,
    },

    /// A person with this name already exists.
    #[error("name already exists: {0}")]
    DuplicateName(String),

    /// A field constraint was rejected at the storage boundary.
    #[error("constraint violation: {0}")]
    Constraint(#[from] FieldViolation),

    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
