//! Opaque identifier for directory entries.
//!
//! Identifiers are assigned once by the directory engine when a person is
//! created and never change afterwards. They are carried as text so that
//! records from any backend (including remote sources that use their own
//! identifier scheme) fit the same type. Freshly generated identifiers use
//! UUID v7 (time-ordered) for efficient database indexing.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Unique identifier of a [`Person`](crate::Person).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export, export_to = "bindings/")]
pub struct PersonId(String);

impl PersonId {
    /// Generate a fresh identifier using UUID v7 (time-ordered).
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the inner string value.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for PersonId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PersonId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<PersonId> for String {
    fn from(id: PersonId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct_and_non_empty() {
        let a = PersonId::generate();
        let b = PersonId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn id_serializes_as_plain_string() {
        let id = PersonId::from("3d594650-3436-11e9-bc57-8b80ba54c431");
        let json = serde_json::to_string(&id).ok();
        assert_eq!(
            json.as_deref(),
            Some("\"3d594650-3436-11e9-bc57-8b80ba54c431\"")
        );
    }

    #[test]
    fn id_display_matches_inner() {
        let id = PersonId::generate();
        assert_eq!(id.to_string(), id.clone().into_inner());
    }
}
