//! Error types for the query surface.
//!
//! [`ApiError`] carries a stable external [`ErrorCode`] translated from the
//! engine's [`ErrorKind`], and converts into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use phonebook_core::{DirectoryError, ErrorKind};

/// External error codes returned to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A field failed its constraint.
    BadUserInput,
    /// The name is already taken.
    DuplicateName,
    /// No person has the requested name.
    NotFound,
    /// The storage backend failed.
    StorageUnavailable,
}

impl ErrorCode {
    /// Code string as sent on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadUserInput => "BAD_USER_INPUT",
            Self::DuplicateName => "DUPLICATE_NAME",
            Self::NotFound => "NOT_FOUND",
            Self::StorageUnavailable => "STORAGE_UNAVAILABLE",
        }
    }

    /// HTTP status used for this code.
    pub const fn status(self) -> StatusCode {
        match self {
            Self::BadUserInput => StatusCode::BAD_REQUEST,
            Self::DuplicateName => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::StorageUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<ErrorKind> for ErrorCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidArgument => Self::BadUserInput,
            ErrorKind::DuplicateName => Self::DuplicateName,
            ErrorKind::NotFound => Self::NotFound,
            ErrorKind::StorageUnavailable => Self::StorageUnavailable,
        }
    }
}

/// An error returned by a query surface operation.
#[derive(Debug, thiserror::Error)]
#[error("{}: {message}", code.as_str())]
pub struct ApiError {
    /// External error code.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
}

impl ApiError {
    /// A `BAD_USER_INPUT` error for a request that could not be decoded.
    pub fn bad_input(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::BadUserInput,
            message: message.into(),
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        let code = ErrorCode::from(err.kind());
        if code == ErrorCode::StorageUnavailable {
            tracing::error!(error = %err, "Storage failure");
        }
        Self {
            code,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status();

        let body = serde_json::json!({
            "error": self.message,
            "code": self.code.as_str(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use phonebook_db::StoreError;
    use phonebook_types::{Field, FieldViolation};

    use super::*;

    #[test]
    fn every_kind_has_a_distinct_code() {
        let codes = [
            ErrorCode::from(ErrorKind::InvalidArgument),
            ErrorCode::from(ErrorKind::DuplicateName),
            ErrorCode::from(ErrorKind::NotFound),
            ErrorCode::from(ErrorKind::StorageUnavailable),
        ];
        let strings: std::collections::BTreeSet<&str> = codes.iter().map(|c| c.as_str()).collect();
        assert_eq!(strings.len(), 4);
    }

    #[test]
    fn invalid_argument_becomes_bad_request() {
        let err = ApiError::from(DirectoryError::from(FieldViolation::new(
            Field::Street,
            "must be at least 5 characters",
        )));
        assert_eq!(err.code, ErrorCode::BadUserInput);
        assert!(err.message.contains("street"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_becomes_404() {
        let err = ApiError::from(DirectoryError::NotFound("Unknown".to_owned()));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn storage_failure_becomes_503() {
        let err = ApiError::from(DirectoryError::StorageUnavailable(StoreError::Remote(
            "http://localhost:3000/persons returned 500".to_owned(),
        )));
        assert_eq!(err.code, ErrorCode::StorageUnavailable);

        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["code"], "STORAGE_UNAVAILABLE");
        assert_eq!(json["status"], 503);
    }
}
