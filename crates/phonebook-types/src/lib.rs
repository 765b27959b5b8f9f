//! Shared type definitions for the phonebook directory.
//!
//! This crate is the single source of truth for the entity model used
//! across the workspace. [`Person`], [`Address`], [`PersonId`], and
//! [`PhoneFilter`] flow to `TypeScript` via `ts-rs` for API clients.
//!
//! # Modules
//!
//! - [`ids`] -- Opaque person identifier
//! - [`person`] -- `Person`, its `Address` projection, and creation input
//! - [`enums`] -- Phone filter and phone policy
//! - [`validation`] -- Field constraint predicates

pub mod enums;
pub mod ids;
pub mod person;
pub mod validation;

// Re-export all public types at crate root for convenience.
pub use enums::{PhoneFilter, PhonePolicy};
pub use ids::PersonId;
pub use person::{Address, NewPerson, Person};
pub use validation::{
    Field, FieldViolation, is_valid_city, is_valid_name, is_valid_phone, is_valid_street,
    validate_fields, validate_new_person, validate_phone,
};
