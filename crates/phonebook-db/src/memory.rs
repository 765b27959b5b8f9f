//! Process-local volatile backend.
//!
//! Records live in a `Vec` behind a [`RwLock`] and are lost on restart.
//! The duplicate-name check and the push happen under the same write lock,
//! so two concurrent inserts of one name cannot both succeed.

use phonebook_types::{Person, PersonId, PhonePolicy};
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::store::PersonStore;

/// In-memory [`PersonStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    people: RwLock<Vec<Person>>,
    phone_policy: PhonePolicy,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with `people`.
    ///
    /// Seed records are taken as-is; later duplicates of an earlier name
    /// are dropped.
    pub fn with_people(people: Vec<Person>) -> Self {
        let mut seeded: Vec<Person> = Vec::with_capacity(people.len());
        for person in people {
            if seeded.iter().any(|p| p.name == person.name) {
                tracing::warn!(name = person.name, "Skipping duplicate seed record");
                continue;
            }
            seeded.push(person);
        }
        Self {
            people: RwLock::new(seeded),
            phone_policy: PhonePolicy::Optional,
        }
    }

    /// Declare the phone policy this store reports.
    #[must_use]
    pub const fn with_phone_policy(mut self, policy: PhonePolicy) -> Self {
        self.phone_policy = policy;
        self
    }
}

impl PersonStore for MemoryStore {
    async fn count_all(&self) -> Result<u64, StoreError> {
        let people = self.people.read().await;
        Ok(u64::try_from(people.len()).unwrap_or(u64::MAX))
    }

    async fn list_all(&self) -> Result<Vec<Person>, StoreError> {
        Ok(self.people.read().await.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, StoreError> {
        let people = self.people.read().await;
        Ok(people.iter().find(|p| p.name == name).cloned())
    }

    async fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>, StoreError> {
        let people = self.people.read().await;
        Ok(people.iter().find(|p| &p.id == id).cloned())
    }

    async fn insert(&self, person: Person) -> Result<Person, StoreError> {
        let mut people = self.people.write().await;
        if people.iter().any(|p| p.name == person.name) {
            return Err(StoreError::DuplicateName(person.name));
        }
        people.push(person.clone());
        tracing::debug!(id = %person.id, total = people.len(), "Inserted person (memory)");
        Ok(person)
    }

    async fn update_phone(&self, id: &PersonId, phone: &str) -> Result<Option<Person>, StoreError> {
        let mut people = self.people.write().await;
        let Some(person) = people.iter_mut().find(|p| &p.id == id) else {
            return Ok(None);
        };
        person.phone = Some(phone.to_owned());
        Ok(Some(person.clone()))
    }

    fn phone_policy(&self) -> PhonePolicy {
        self.phone_policy
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
