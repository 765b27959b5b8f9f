//! The directory engine.
//!
//! [`Directory`] applies the business rules (field validation, unique
//! names, phone filtering) on top of any [`PersonStore`]. It owns its store;
//! there is no process-wide state.
//!
//! Every operation issues at most one store call, except [`Directory::add`]
//! (name lookup, then insert) and [`Directory::edit_phone`] (id lookup,
//! then update). Nothing is retried.

use phonebook_db::PersonStore;
use phonebook_types::{
    Address, NewPerson, Person, PersonId, PhoneFilter, PhonePolicy, validate_new_person,
    validate_phone,
};
use tracing::{debug, warn};

use crate::error::DirectoryError;

/// Project a person's street and city.
///
/// Pure; the person is not modified.
pub fn resolve_address(person: &Person) -> Address {
    person.address()
}

/// Business-rule layer over a storage backend.
#[derive(Debug)]
pub struct Directory<S> {
    store: S,
    phone_policy: PhonePolicy,
}

impl<S: PersonStore> Directory<S> {
    /// Create a directory over `store`, using the phone policy the store declares.
    pub fn new(store: S) -> Self {
        let phone_policy = store.phone_policy();
        Self {
            store,
            phone_policy,
        }
    }

    /// Override the phone policy declared by the store.
    #[must_use]
    pub const fn with_phone_policy(mut self, policy: PhonePolicy) -> Self {
        self.phone_policy = policy;
        self
    }

    /// The active phone policy.
    pub const fn phone_policy(&self) -> PhonePolicy {
        self.phone_policy
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Total number of people.
    pub async fn count(&self) -> Result<u64, DirectoryError> {
        let count = self.store.count_all().await?;
        debug!(count, "Counted people");
        Ok(count)
    }

    /// All people, optionally restricted by phone presence.
    pub async fn list(&self, filter: Option<PhoneFilter>) -> Result<Vec<Person>, DirectoryError> {
        let people = self.store.list_all().await?;
        let people: Vec<Person> = match filter {
            None => people,
            Some(filter) => people
                .into_iter()
                .filter(|p| filter.accepts(p.has_phone()))
                .collect(),
        };
        debug!(?filter, count = people.len(), "Listed people");
        Ok(people)
    }

    /// The person with exactly this name.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::NotFound`] when nobody has the name.
    pub async fn find(&self, name: &str) -> Result<Person, DirectoryError> {
        self.store
            .find_by_name(name)
            .await?
            .ok_or_else(|| DirectoryError::NotFound(name.to_owned()))
    }

    /// Create a person.
    ///
    /// Fields are validated against the active phone policy, and the name
    /// must not already exist. A new identifier is assigned before insert.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::InvalidArgument`] for a bad field,
    /// [`DirectoryError::DuplicateName`] for a taken name (including one the
    /// store rejects because a concurrent create won the race).
    pub async fn add(&self, new: NewPerson) -> Result<Person, DirectoryError> {
        if let Err(violation) = validate_new_person(&new, self.phone_policy) {
            warn!(field = %violation.field, name = new.name, "Rejected person: invalid field");
            return Err(violation.into());
        }

        if self.store.find_by_name(&new.name).await?.is_some() {
            warn!(name = new.name, "Rejected person: duplicate name");
            return Err(DirectoryError::DuplicateName(new.name));
        }

        let person = Person::from_new(PersonId::generate(), new);
        let stored = self.store.insert(person).await.inspect_err(|e| {
            warn!(error = %e, backend = self.store.backend_name(), "Insert failed");
        })?;

        debug!(id = %stored.id, name = stored.name, "Added person");
        Ok(stored)
    }

    /// Replace a person's phone.
    ///
    /// Returns `Ok(None)` when `id` is unknown; this is not an error.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::InvalidArgument`] if `phone` is too short.
    pub async fn edit_phone(
        &self,
        id: &PersonId,
        phone: &str,
    ) -> Result<Option<Person>, DirectoryError> {
        if self.store.find_by_id(id).await?.is_none() {
            debug!(%id, "Phone edit for unknown id");
            return Ok(None);
        }

        validate_phone(phone)?;

        let updated = self.store.update_phone(id, phone).await?;
        debug!(%id, updated = updated.is_some(), "Edited phone");
        Ok(updated)
    }
}
