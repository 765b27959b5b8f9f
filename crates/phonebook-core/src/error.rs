//! Error types for the directory engine.
//!
//! [`DirectoryError`] is a closed set of outcomes. Callers branch on
//! [`DirectoryError::kind`] rather than on message text.

use phonebook_db::StoreError;
use phonebook_types::{Field, FieldViolation};

/// Discriminant of a [`DirectoryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A field failed its constraint.
    InvalidArgument,
    /// The name is already taken.
    DuplicateName,
    /// No record has the requested name.
    NotFound,
    /// The storage backend failed or cannot serve the operation.
    StorageUnavailable,
}

/// Errors returned by [`Directory`](crate::Directory) operations.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// A field failed its constraint; the message names the field.
    #[error("{0}")]
    InvalidArgument(FieldViolation),

    /// A person with this name already exists.
    #[error("name must be unique: {0}")]
    DuplicateName(String),

    /// No person has this name.
    #[error("person not found: {0}")]
    NotFound(String),

    /// The storage backend failed.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[source] StoreError),
}

impl DirectoryError {
    /// The kind of failure.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::DuplicateName(_) => ErrorKind::DuplicateName,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::StorageUnavailable(_) => ErrorKind::StorageUnavailable,
        }
    }

    /// The offending field, for [`ErrorKind::InvalidArgument`].
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::InvalidArgument(violation) => Some(violation.field),
            _ => None,
        }
    }
}

impl From<FieldViolation> for DirectoryError {
    fn from(violation: FieldViolation) -> Self {
        Self::InvalidArgument(violation)
    }
}

impl From<StoreError> for DirectoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateName(name) => Self::DuplicateName(name),
            StoreError::Constraint(violation) => Self::InvalidArgument(violation),
            other => Self::StorageUnavailable(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_outcomes_map_to_kinds() {
        let dup: DirectoryError = StoreError::DuplicateName("Jorge".to_owned()).into();
        assert_eq!(dup.kind(), ErrorKind::DuplicateName);

        let constraint: DirectoryError =
            StoreError::Constraint(FieldViolation::new(Field::Street, "too short")).into();
        assert_eq!(constraint.kind(), ErrorKind::InvalidArgument);
        assert_eq!(constraint.field(), Some(Field::Street));

        let remote: DirectoryError = StoreError::Remote("503".to_owned()).into();
        assert_eq!(remote.kind(), ErrorKind::StorageUnavailable);

        let unsupported: DirectoryError = StoreError::Unsupported {
            backend: "remote",
            operation: "insert",
        }
        .into();
        assert_eq!(unsupported.kind(), ErrorKind::StorageUnavailable);
    }

    #[test]
    fn invalid_argument_message_names_field() {
        let err = DirectoryError::from(FieldViolation::new(Field::Name, "must be at least 5 characters"));
        assert_eq!(err.to_string(), "invalid name: must be at least 5 characters");
        assert_eq!(err.field(), Some(Field::Name));
    }
}
