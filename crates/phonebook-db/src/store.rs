//! The storage capability every backend implements.
//!
//! [`PersonStore`] is the contract the directory engine programs against.
//! [`StoreBackend`] selects one concrete realization at deployment time.
//! It uses enum dispatch rather than `dyn PersonStore`, because trait
//! methods returning `impl Future` are not dyn-compatible.

use std::future::Future;

use phonebook_types::{Person, PersonId, PhonePolicy};

use crate::error::StoreError;
use crate::memory::MemoryStore;
use crate::postgres::PgPersonStore;
use crate::remote::RemoteStore;

/// Abstract storage for [`Person`] records.
///
/// Implementations must reject a second record with an existing `name`
/// with [`StoreError::DuplicateName`], so that a lost race between two
/// concurrent creates is resolved at the storage boundary.
pub trait PersonStore: Send + Sync {
    /// Total number of stored records.
    fn count_all(&self) -> impl Future<Output = Result<u64, StoreError>> + Send;

    /// Every stored record. Order carries no meaning.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Person>, StoreError>> + Send;

    /// The record whose name matches exactly (case-sensitive).
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Person>, StoreError>> + Send;

    /// The record with the given identifier.
    fn find_by_id(
        &self,
        id: &PersonId,
    ) -> impl Future<Output = Result<Option<Person>, StoreError>> + Send;

    /// Store a new record and return it as stored.
    fn insert(&self, person: Person) -> impl Future<Output = Result<Person, StoreError>> + Send;

    /// Replace the phone of an existing record. `None` if `id` is unknown.
    fn update_phone(
        &self,
        id: &PersonId,
        phone: &str,
    ) -> impl Future<Output = Result<Option<Person>, StoreError>> + Send;

    /// The phone policy this backend declares by default.
    fn phone_policy(&self) -> PhonePolicy {
        PhonePolicy::Optional
    }

    /// Short backend name for logging.
    fn backend_name(&self) -> &'static str;
}

/// A storage backend chosen by configuration.
#[derive(Debug)]
pub enum StoreBackend {
    /// Process-local volatile list.
    Memory(MemoryStore),
    /// Read-only remote HTTP source.
    Remote(RemoteStore),
    /// Persistent `PostgreSQL` table.
    Postgres(PgPersonStore),
}

impl PersonStore for StoreBackend {
    async fn count_all(&self) -> Result<u64, StoreError> {
        match self {
            Self::Memory(store) => store.count_all().await,
            Self::Remote(store) => store.count_all().await,
            Self::Postgres(store) => store.count_all().await,
        }
    }

    async fn list_all(&self) -> Result<Vec<Person>, StoreError> {
        match self {
            Self::Memory(store) => store.list_all().await,
            Self::Remote(store) => store.list_all().await,
            Self::Postgres(store) => store.list_all().await,
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, StoreError> {
        match self {
            Self::Memory(store) => store.find_by_name(name).await,
            Self::Remote(store) => store.find_by_name(name).await,
            Self::Postgres(store) => store.find_by_name(name).await,
        }
    }

    async fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>, StoreError> {
        match self {
            Self::Memory(store) => store.find_by_id(id).await,
            Self::Remote(store) => store.find_by_id(id).await,
            Self::Postgres(store) => store.find_by_id(id).await,
        }
    }

    async fn insert(&self, person: Person) -> Result<Person, StoreError> {
        match self {
            Self::Memory(store) => store.insert(person).await,
            Self::Remote(store) => store.insert(person).await,
            Self::Postgres(store) => store.insert(person).await,
        }
    }

    async fn update_phone(&self, id: &PersonId, phone: &str) -> Result<Option<Person>, StoreError> {
        match self {
            Self::Memory(store) => store.update_phone(id, phone).await,
            Self::Remote(store) => store.update_phone(id, phone).await,
            Self::Postgres(store) => store.update_phone(id, phone).await,
        }
    }

    fn phone_policy(&self) -> PhonePolicy {
        match self {
            Self::Memory(store) => store.phone_policy(),
            Self::Remote(store) => store.phone_policy(),
            Self::Postgres(store) => store.phone_policy(),
        }
    }

    fn backend_name(&self) -> &'static str {
        match self {
            Self::Memory(store) => store.backend_name(),
            Self::Remote(store) => store.backend_name(),
            Self::Postgres(store) => store.backend_name(),
        }
    }
}

impl From<MemoryStore> for StoreBackend {
    fn from(store: MemoryStore) -> Self {
        Self::Memory(store)
    }
}

impl From<RemoteStore> for StoreBackend {
    fn from(store: RemoteStore) -> Self {
        Self::Remote(store)
    }
}

impl From<PgPersonStore> for StoreBackend {
    fn from(store: PgPersonStore) -> Self {
        Self::Postgres(store)
    }
}
