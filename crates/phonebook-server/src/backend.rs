//! Backend selection and startup seeding.

use std::time::Duration;

use phonebook_core::{BackendKind, Directory, DirectoryError, StorageConfig};
use phonebook_db::{
    MemoryStore, PersonStore, PgPersonStore, PostgresConfig, RemoteConfig, RemoteStore, StoreBackend,
    StoreError,
};
use phonebook_types::NewPerson;
use tracing::{info, warn};

/// Build the configured [`StoreBackend`].
///
/// For `PostgreSQL` this connects the pool and, when enabled, runs the
/// embedded migrations.
///
/// # Errors
///
/// Returns a [`StoreError`] if the remote client cannot be built or the
/// database cannot be reached or migrated.
pub async fn build_backend(config: &StorageConfig) -> Result<StoreBackend, StoreError> {
    match config.backend {
        BackendKind::Memory => {
            info!("Using in-memory backend");
            Ok(MemoryStore::new().into())
        }
        BackendKind::Remote => {
            let remote = RemoteConfig::new(&config.remote_url)
                .with_timeout(Duration::from_millis(config.remote_timeout_ms));
            info!(url = config.remote_url, timeout_ms = config.remote_timeout_ms, "Using remote backend");
            Ok(RemoteStore::new(&remote)?.into())
        }
        BackendKind::Postgres => {
            let pg = PostgresConfig::new(&config.postgres_url)
                .with_max_connections(config.max_connections);
            let store = PgPersonStore::connect(&pg).await?;
            if config.run_migrations {
                store.run_migrations().await?;
                info!("Migrations applied");
            }
            info!(max_connections = config.max_connections, "Using PostgreSQL backend");
            Ok(store.into())
        }
    }
}

/// Wrap a backend in the engine, applying any configured phone policy.
pub fn build_directory<S: PersonStore>(store: S, config: &StorageConfig) -> Directory<S> {
    let directory = Directory::new(store);
    match config.phone_policy {
        Some(policy) => directory.with_phone_policy(policy),
        None => directory,
    }
}

/// Add the configured seed people through the engine.
///
/// Names that already exist are skipped. Other rejections are logged and
/// do not stop startup. Returns how many people were added.
pub async fn seed<S: PersonStore>(directory: &Directory<S>, people: &[NewPerson]) -> usize {
    let mut added: usize = 0;
    for person in people {
        match directory.add(person.clone()).await {
            Ok(_) => added = added.saturating_add(1),
            Err(DirectoryError::DuplicateName(name)) => {
                info!(name, "Seed person already present");
            }
            Err(e) => {
                warn!(name = person.name, error = %e, "Seed person rejected");
            }
        }
    }
    if !people.is_empty() {
        info!(added, requested = people.len(), "Seeding complete");
    }
    added
}
