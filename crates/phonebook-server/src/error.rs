//! Error types for the phonebook server binary.
//!
//! [`ServerAppError`] wraps every failure mode during startup and serving so
//! `main` can propagate with `?`.

/// Top-level error for the phonebook server binary.
#[derive(Debug, thiserror::Error)]
pub enum ServerAppError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: phonebook_core::ConfigError,
    },

    /// The storage backend could not be built or migrated.
    #[error("storage error: {source}")]
    Storage {
        /// The underlying store error.
        #[from]
        source: phonebook_db::StoreError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: phonebook_api::ServerError,
    },
}
