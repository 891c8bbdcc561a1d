//! # Store
//!
//! The handle the API layer holds. Owns one repository per record kind,
//! all sharing the same id generator and clock.
//!
//! ```text
//! Store
//! ├── bookings()  ──► BookingRepository
//! └── contacts()  ──► ContactRepository
//! ```
//!
//! Cloning a `Store` is cheap and every clone sees the same data.

use std::sync::Arc;

use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::id::{IdGenerator, UuidGenerator};
use crate::repository::booking::BookingRepository;
use crate::repository::contact::ContactRepository;

/// In-memory record store.
#[derive(Debug, Clone)]
pub struct Store {
    bookings: BookingRepository,
    contacts: ContactRepository,
}

impl Store {
    /// Empty store with UUID ids and wall-clock timestamps.
    pub fn in_memory() -> Self {
        Self::with_sources(Arc::new(UuidGenerator), Arc::new(SystemClock))
    }

    /// Empty store with custom id and time sources.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let clock = Arc::new(ManualClock::new(start));
    /// let store = Store::with_sources(Arc::new(SequentialIds::new("bk")), clock.clone());
    /// ```
    pub fn with_sources(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        info!("Initializing in-memory store");
        Store {
            bookings: BookingRepository::new(ids.clone(), clock.clone()),
            contacts: ContactRepository::new(ids, clock),
        }
    }

    pub fn bookings(&self) -> &BookingRepository {
        &self.bookings
    }

    pub fn contacts(&self) -> &ContactRepository {
        &self.contacts
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haven_core::NewContact;

    #[tokio::test]
    async fn test_clones_share_data() {
        let store = Store::in_memory();
        let clone = store.clone();

        let contact = clone
            .contacts()
            .create(NewContact {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hello".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(store.contacts().get(&contact.id).await, Some(contact));
        assert!(store.bookings().is_empty().await);
    }
}
