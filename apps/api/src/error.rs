//! # API Error Type
//!
//! Unified error type for axum handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Haven                                  │
//! │                                                                         │
//! │  Handler: Result<T, ApiError>                                          │
//! │         │                                                               │
//! │         ├── JsonRejection ─────────────► 400 BAD_REQUEST               │
//! │         ├── ValidationErrors ──────────► 400 VALIDATION_ERROR + fields │
//! │         ├── Option::None from store ───► 404 NOT_FOUND                 │
//! │         └── StoreError ────────────────► 500 INTERNAL_ERROR            │
//! │                                           (details only in the log)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Response Body
//! ```json
//! {
//!   "code": "VALIDATION_ERROR",
//!   "message": "guests must be between 1 and 10; guestEmail has invalid format: must be a valid email address",
//!   "fields": [
//!     { "field": "guests", "message": "guests must be between 1 and 10" },
//!     { "field": "guestEmail", "message": "guestEmail has invalid format: must be a valid email address" }
//!   ]
//! }
//! ```
//! `fields` is omitted when empty.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use haven_core::error::FieldError;
use haven_core::ValidationErrors;
use haven_store::StoreError;

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned from handlers.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Per-field failures of a validation error
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,

    /// Internal detail, logged but never sent
    #[serde(skip)]
    detail: Option<String>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unparseable body or query (400)
    BadRequest,

    /// Input validation failed (400)
    ValidationError,

    /// Resource not found (404)
    NotFound,

    /// Internal server error (500)
    InternalError,
}

impl ErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::BadRequest | ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            fields: Vec::new(),
            detail: None,
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    /// Creates an internal error. The detail goes to the log only.
    pub fn internal(detail: impl Into<String>) -> Self {
        ApiError {
            detail: Some(detail.into()),
            ..ApiError::new(ErrorCode::InternalError, "Internal server error")
        }
    }

    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Converts a validation report into a 400 with the per-field list.
impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError {
            fields: errors.field_errors(),
            ..ApiError::new(ErrorCode::ValidationError, errors.to_string())
        }
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::internal(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                message = %self.message,
                detail = self.detail.as_deref().unwrap_or(""),
                "Internal server error"
            );
        } else {
            tracing::debug!(status = %status, message = %self.message, "Request rejected");
        }

        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haven_core::ValidationError;

    #[test]
    fn test_validation_errors_keep_every_field() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::OutOfRange {
            field: "guests".to_string(),
            min: 1,
            max: 10,
        });
        errors.push(ValidationError::Required {
            field: "guestName".to_string(),
        });

        let err = ApiError::from(errors);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["fields"].as_array().unwrap().len(), 2);
        assert_eq!(json["fields"][0]["field"], "guests");
        assert_eq!(json["fields"][1]["message"], "guestName is required");
    }

    #[test]
    fn test_internal_detail_is_not_serialized() {
        let err = ApiError::from(StoreError::duplicate("booking", "b-1"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["message"], "Internal server error");
        assert!(json.get("detail").is_none());
        assert!(json.get("fields").is_none());
    }

    #[test]
    fn test_not_found_message() {
        let err = ApiError::not_found("Booking", "abc");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Booking not found: abc");
    }
}
