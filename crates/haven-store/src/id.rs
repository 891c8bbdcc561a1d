//! # Identifier Generation
//!
//! Every stored record gets an opaque id from an [`IdGenerator`].
//! Production uses UUID v4; tests use [`SequentialIds`] for readable,
//! predictable ids.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of fresh record identifiers.
pub trait IdGenerator: Send + Sync + fmt::Debug {
    /// Returns a new identifier.
    fn next_id(&self) -> String;
}

/// UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// `prefix-1`, `prefix-2`, ...
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialIds {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_unique() {
        let ids = UuidGenerator;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIds::new("bk");
        assert_eq!(ids.next_id(), "bk-1");
        assert_eq!(ids.next_id(), "bk-2");
    }
}
