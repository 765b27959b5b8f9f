//! The query surface: external operations mapped onto the directory engine.
//!
//! Each operation calls exactly one [`Directory`] method and translates the
//! outcome. Persons leave the surface as [`PersonView`], whose `address` is
//! the nested projection from [`resolve_address`].

use phonebook_core::{Directory, resolve_address};
use phonebook_db::PersonStore;
use phonebook_types::{Address, NewPerson, Person, PersonId, PhoneFilter, PhonePolicy};
use serde::Serialize;

use crate::error::ApiError;
use crate::schema::render_sdl;

/// A person as seen by external callers.
///
/// `phone` is always present in the serialized form, as `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonView {
    /// Unique display name.
    pub name: String,
    /// Phone number, `null` when none is on record.
    pub phone: Option<String>,
    /// Nested address projection.
    pub address: Address,
    /// Opaque identifier.
    pub id: PersonId,
}

impl From<Person> for PersonView {
    fn from(person: Person) -> Self {
        let address = resolve_address(&person);
        Self {
            name: person.name,
            phone: person.phone,
            address,
            id: person.id,
        }
    }
}

/// External operations over a [`Directory`].
#[derive(Debug)]
pub struct QuerySurface<S> {
    directory: Directory<S>,
}

impl<S: PersonStore> QuerySurface<S> {
    /// Wrap a directory engine.
    pub const fn new(directory: Directory<S>) -> Self {
        Self { directory }
    }

    /// The wrapped engine.
    pub const fn directory(&self) -> &Directory<S> {
        &self.directory
    }

    /// Phone policy in effect for creation.
    pub const fn phone_policy(&self) -> PhonePolicy {
        self.directory.phone_policy()
    }

    /// `personCount`.
    ///
    /// # Errors
    ///
    /// `STORAGE_UNAVAILABLE` if the store fails.
    pub async fn person_count(&self) -> Result<u64, ApiError> {
        Ok(self.directory.count().await?)
    }

    /// `allPeople`. Never returns null; an empty directory yields `[]`.
    ///
    /// # Errors
    ///
    /// `STORAGE_UNAVAILABLE` if the store fails.
    pub async fn all_people(&self, phone: Option<PhoneFilter>) -> Result<Vec<PersonView>, ApiError> {
        let people = self.directory.list(phone).await?;
        Ok(people.into_iter().map(PersonView::from).collect())
    }

    /// `findPerson`.
    ///
    /// # Errors
    ///
    /// `NOT_FOUND` when nobody has the name.
    pub async fn find_person(&self, name: &str) -> Result<PersonView, ApiError> {
        Ok(self.directory.find(name).await?.into())
    }

    /// `addPerson`.
    ///
    /// # Errors
    ///
    /// `BAD_USER_INPUT` for an invalid field, `DUPLICATE_NAME` for a taken
    /// name.
    pub async fn add_person(
        &self,
        name: String,
        phone: Option<String>,
        street: String,
        city: String,
    ) -> Result<PersonView, ApiError> {
        let new = NewPerson {
            name,
            phone,
            street,
            city,
        };
        Ok(self.directory.add(new).await?.into())
    }

    /// `editPhone`. Unknown ids yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// `BAD_USER_INPUT` if the phone is too short.
    pub async fn edit_phone(&self, id: &PersonId, phone: &str) -> Result<Option<PersonView>, ApiError> {
        let updated = self.directory.edit_phone(id, phone).await?;
        Ok(updated.map(PersonView::from))
    }

    /// SDL for the external contract under the active phone policy.
    pub fn schema(&self) -> String {
        render_sdl(self.phone_policy())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use phonebook_db::MemoryStore;

    use super::*;
    use crate::error::ErrorCode;

    fn surface() -> QuerySurface<MemoryStore> {
        QuerySurface::new(Directory::new(MemoryStore::new()))
    }

    #[test]
    fn view_nests_address_and_keeps_null_phone() {
        let person = Person {
            id: PersonId::from("1"),
            name: "Arto Hellas".to_owned(),
            phone: None,
            street: "Tapiolankatu 5".to_owned(),
            city: "Espoo".to_owned(),
        };
        let json = serde_json::to_value(PersonView::from(person)).unwrap();
        assert_eq!(json["address"]["city"], "Espoo");
        assert_eq!(json["address"]["street"], "Tapiolankatu 5");
        assert!(json["phone"].is_null());
        assert_eq!(json["id"], "1");
        assert!(json.get("street").is_none());
    }

    #[tokio::test]
    async fn add_then_find_round_trips_through_views() {
        let surface = surface();
        let added = surface
            .add_person(
                "Jorge Luis".to_owned(),
                Some("342-4388-3989".to_owned()),
                "False 123".to_owned(),
                "Vera".to_owned(),
            )
            .await
            .unwrap();
        let found = surface.find_person("Jorge Luis").await.unwrap();
        assert_eq!(added, found);
        assert_eq!(surface.person_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn errors_carry_external_codes() {
        let surface = surface();
        let short = surface
            .add_person("Ana".to_owned(), None, "False 123".to_owned(), "Vera".to_owned())
            .await
            .unwrap_err();
        assert_eq!(short.code, ErrorCode::BadUserInput);

        let missing = surface.find_person("Nobody Here").await.unwrap_err();
        assert_eq!(missing.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn edit_phone_on_unknown_id_is_none() {
        let surface = surface();
        let result = surface
            .edit_phone(&PersonId::from("missing"), "5555555555")
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
