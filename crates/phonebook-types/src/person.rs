//! Directory entry types.
//!
//! A [`Person`] is stored flat (`name`, `phone`, `street`, `city`). The
//! [`Address`] is never stored on its own; it is a read-time view
//! projected from the person's own fields.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::PersonId;

/// One directory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Person {
    /// Identifier assigned at creation.
    pub id: PersonId,
    /// Unique display name (at least 5 characters).
    pub name: String,
    /// Phone number (at least 10 characters when present).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Street line (at least 5 characters).
    pub street: String,
    /// City (non-empty).
    pub city: String,
}

impl Person {
    /// Build a stored record from creation input and an assigned identifier.
    pub fn from_new(id: PersonId, new: NewPerson) -> Self {
        Self {
            id,
            name: new.name,
            phone: new.phone,
            street: new.street,
            city: new.city,
        }
    }

    /// Whether this record carries a phone number.
    pub const fn has_phone(&self) -> bool {
        self.phone.is_some()
    }

    /// Project the person's street and city into an [`Address`].
    pub fn address(&self) -> Address {
        Address {
            city: self.city.clone(),
            street: self.street.clone(),
        }
    }
}

/// Read-time projection of a person's street and city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Address {
    /// City name.
    pub city: String,
    /// Street line.
    pub street: String,
}

/// Input for creating a person. The identifier is assigned by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    /// Unique display name.
    pub name: String,
    /// Optional phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Street line.
    pub street: String,
    /// City.
    pub city: String,
}
