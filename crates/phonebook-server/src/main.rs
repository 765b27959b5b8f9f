//! Phonebook service binary.
//!
//! Wires configuration, the storage backend, the directory engine, and the
//! HTTP API together, then serves until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `phonebook-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Build the configured storage backend
//! 4. Wrap it in the directory engine, applying the phone policy override
//! 5. Seed the configured people
//! 6. Serve the HTTP API
//! 7. Close the backend on shutdown

mod backend;
mod error;

use std::path::Path;
use std::sync::Arc;

use phonebook_api::AppState;
use phonebook_core::DirectoryConfig;
use phonebook_db::{PersonStore, StoreBackend};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ServerAppError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, backend setup, or the server fails.
#[tokio::main]
async fn main() -> Result<(), ServerAppError> {
    // 1. Configuration first, so the log level can come from it.
    let config = load_config()?;

    // 2. Structured logging. RUST_LOG wins over the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!(
        backend = ?config.storage.backend,
        phone_policy = ?config.storage.phone_policy,
        seed_count = config.seed.len(),
        "phonebook-server starting"
    );

    // 3. Storage backend.
    let store = backend::build_backend(&config.storage).await?;

    // 4. Directory engine.
    let directory = backend::build_directory(store, &config.storage);
    info!(
        backend = directory.store().backend_name(),
        phone_policy = ?directory.phone_policy(),
        "Directory ready"
    );

    // 5. Seed.
    backend::seed(&directory, &config.seed).await;

    // 6. Serve.
    let state = Arc::new(AppState::new(directory));
    let listener = phonebook_api::bind(&config.server).await?;
    phonebook_api::serve(listener, Arc::clone(&state), phonebook_api::ctrl_c()).await?;

    // 7. Release pooled connections.
    if let StoreBackend::Postgres(store) = state.surface.directory().store() {
        store.close().await;
    }

    info!("phonebook-server shutdown complete");
    Ok(())
}

/// Load configuration from `phonebook-config.yaml`.
///
/// Looks for the file relative to the current working directory. When it
/// is absent, defaults plus environment overrides are used.
fn load_config() -> Result<DirectoryConfig, ServerAppError> {
    let config_path = Path::new("phonebook-config.yaml");
    if config_path.exists() {
        Ok(DirectoryConfig::from_file(config_path)?)
    } else {
        let mut config = DirectoryConfig::default();
        config.apply_env_overrides()?;
        Ok(config)
    }
}
