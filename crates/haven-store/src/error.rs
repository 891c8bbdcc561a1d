//! # Store Error Types
//!
//! Error types for storage operations.
//!
//! A missing record is NOT an error here: lookups return `Option` and the
//! API turns `None` into a 404. `StoreError` is reserved for broken
//! storage invariants.
//!
//! ## Error Flow
//! ```text
//! Repository call
//!      │
//!      ▼
//! StoreError (this module)
//!      │
//!      ▼
//! ApiError (in haven-api) ← generic 500, details only in the log
//! ```

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The id generator produced an identifier that is already taken.
    ///
    /// ## When This Occurs
    /// - A custom `IdGenerator` that repeats itself
    #[error("Duplicate {entity} id: '{id}'")]
    DuplicateId { entity: String, id: String },
}

impl StoreError {
    /// Creates a DuplicateId error.
    pub fn duplicate(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::DuplicateId {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message() {
        let err = StoreError::duplicate("booking", "b-1");
        assert_eq!(err.to_string(), "Duplicate booking id: 'b-1'");
    }
}
