//! # Error Types
//!
//! Domain-specific error types for haven-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  haven-core errors (this file)                                         │
//! │  ├── CoreError         - General domain errors                         │
//! │  ├── ValidationError   - One failing field                             │
//! │  └── ValidationErrors  - Every failing field of one payload            │
//! │                                                                         │
//! │  haven-store errors (separate crate)                                   │
//! │  └── StoreError        - Storage invariant failures                    │
//! │                                                                         │
//! │  haven-api errors (in app)                                             │
//! │  └── ApiError          - What the HTTP client sees (JSON)              │
//! │                                                                         │
//! │  Flow: ValidationErrors ──────────────────────► ApiError (400)        │
//! │        StoreError ────────────────────────────► ApiError (500)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A monetary string could not be parsed.
    ///
    /// ## When This Occurs
    /// - `totalAmount` is negative, has more than two fraction digits,
    ///   or contains anything other than digits and one `.`
    #[error("Invalid amount: '{value}'")]
    InvalidAmount { value: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Every variant carries the JSON name of the field it belongs to so the
/// API can report failures per field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., invalid email, invalid date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {}", .allowed.join(", "))]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Value must come strictly after another field's value.
    #[error("{field} must be after {other}")]
    MustBeAfter { field: String, other: String },

    /// Date lies in the past.
    #[error("{field} has expired")]
    Expired { field: String },
}

impl ValidationError {
    /// Returns the field this error belongs to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NotAllowed { field, .. }
            | ValidationError::MustBeAfter { field, .. }
            | ValidationError::Expired { field } => field,
        }
    }
}

/// One entry of a validation report, as sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All validation failures of a single payload.
///
/// Validators push into this instead of returning on the first failure,
/// so the reservation form can highlight every bad field at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty report.
    pub fn new() -> Self {
        ValidationErrors::default()
    }

    /// Records a failure.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Records the error of a single-field check, if any.
    pub fn check(&mut self, result: Result<(), ValidationError>) {
        if let Err(e) = result {
            self.push(e);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns true if any failure belongs to `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field() == field)
    }

    /// Client-facing per-field report.
    pub fn field_errors(&self) -> Vec<FieldError> {
        self.errors
            .iter()
            .map(|e| FieldError {
                field: e.field().to_string(),
                message: e.to_string(),
            })
            .collect()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        ValidationErrors {
            errors: vec![error],
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "guestName".to_string(),
        };
        assert_eq!(err.to_string(), "guestName is required");

        let err = ValidationError::OutOfRange {
            field: "guests".to_string(),
            min: 1,
            max: 10,
        };
        assert_eq!(err.to_string(), "guests must be between 1 and 10");

        let err = ValidationError::NotAllowed {
            field: "status".to_string(),
            allowed: vec!["pending".to_string(), "confirmed".to_string()],
        };
        assert_eq!(err.to_string(), "status must be one of: pending, confirmed");
    }

    #[test]
    fn test_errors_collects_every_field() {
        let mut errors = ValidationErrors::new();
        errors.check(Ok(()));
        errors.check(Err(ValidationError::Required {
            field: "guestName".to_string(),
        }));
        errors.push(ValidationError::MustBeAfter {
            field: "checkout".to_string(),
            other: "checkin".to_string(),
        });

        assert_eq!(errors.len(), 2);
        assert!(errors.has_field("guestName"));
        assert!(errors.has_field("checkout"));
        assert_eq!(
            errors.to_string(),
            "guestName is required; checkout must be after checkin"
        );

        let report = errors.field_errors();
        assert_eq!(report[1].field, "checkout");
        assert_eq!(report[1].message, "checkout must be after checkin");
    }

    #[test]
    fn test_single_error_converts_to_report() {
        let errors: ValidationErrors = ValidationError::Required {
            field: "email".to_string(),
        }
        .into();
        assert_eq!(errors.len(), 1);
        assert!(errors.has_field("email"));

        let err = CoreError::InvalidAmount {
            value: "-1".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid amount: '-1'");
    }
}
