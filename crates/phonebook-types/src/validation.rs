//! Field constraints for directory entries.
//!
//! The predicates here are pure and side-effect free. Both the directory
//! engine and the persistent backend run them; the first failing field is
//! reported as a [`FieldViolation`].
//!
//! Lengths are counted in characters, not bytes.

use crate::enums::PhonePolicy;
use crate::person::NewPerson;

/// Minimum length of `name`.
pub const MIN_NAME_LEN: usize = 5;

/// Minimum length of `phone` when present.
pub const MIN_PHONE_LEN: usize = 10;

/// Minimum length of `street`.
pub const MIN_STREET_LEN: usize = 5;

/// A field of [`Person`](crate::Person) that carries a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `name`
    Name,
    /// `phone`
    Phone,
    /// `street`
    Street,
    /// `city`
    City,
}

impl Field {
    /// Field name as it appears in the external schema.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Street => "street",
            Self::City => "city",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field failed its constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {reason}")]
pub struct FieldViolation {
    /// The offending field.
    pub field: Field,
    /// Human-readable description of the failed constraint.
    pub reason: String,
}

impl FieldViolation {
    /// Create a violation for `field`.
    pub fn new(field: Field, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// `name` has at least [`MIN_NAME_LEN`] characters.
pub fn is_valid_name(name: &str) -> bool {
    char_len(name) >= MIN_NAME_LEN
}

/// `phone` is absent, or has at least [`MIN_PHONE_LEN`] characters.
pub fn is_valid_phone(phone: Option<&str>) -> bool {
    phone.is_none_or(|p| char_len(p) >= MIN_PHONE_LEN)
}

/// `street` has at least [`MIN_STREET_LEN`] characters.
pub fn is_valid_street(street: &str) -> bool {
    char_len(street) >= MIN_STREET_LEN
}

/// `city` is non-empty.
pub const fn is_valid_city(city: &str) -> bool {
    !city.is_empty()
}

/// Check a phone number supplied to an edit.
pub fn validate_phone(phone: &str) -> Result<(), FieldViolation> {
    if is_valid_phone(Some(phone)) {
        Ok(())
    } else {
        Err(FieldViolation::new(
            Field::Phone,
            format!("must be at least {MIN_PHONE_LEN} characters"),
        ))
    }
}

/// Check every constrained field of a creation request.
///
/// Fields are checked in schema order (name, phone, street, city) and the
/// first failure is returned.
pub fn validate_new_person(new: &NewPerson, policy: PhonePolicy) -> Result<(), FieldViolation> {
    validate_fields(
        &new.name,
        new.phone.as_deref(),
        &new.street,
        &new.city,
        policy,
    )
}

/// Check raw field values, in schema order.
///
/// Storage backends call this on fully-formed records before writing.
pub fn validate_fields(
    name: &str,
    phone: Option<&str>,
    street: &str,
    city: &str,
    policy: PhonePolicy,
) -> Result<(), FieldViolation> {
    if !is_valid_name(name) {
        return Err(FieldViolation::new(
            Field::Name,
            format!("must be at least {MIN_NAME_LEN} characters"),
        ));
    }

    match phone {
        None if policy.is_required() => {
            return Err(FieldViolation::new(Field::Phone, "is required"));
        }
        None => {}
        Some(phone) => validate_phone(phone)?,
    }

    if !is_valid_street(street) {
        return Err(FieldViolation::new(
            Field::Street,
            format!("must be at least {MIN_STREET_LEN} characters"),
        ));
    }

    if !is_valid_city(city) {
        return Err(FieldViolation::new(Field::City, "is required"));
    }

    Ok(())
}
