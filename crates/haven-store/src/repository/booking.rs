//! # Booking Repository
//!
//! Storage operations for reservations.
//!
//! ## Key Operations
//! - Create with server-assigned id and timestamp
//! - Lookup by id
//! - Newest-first listing
//! - Status update
//!
//! ## Lock Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Lock Per Operation                               │
//! │                                                                         │
//! │  create()  ──► write lock ──► id + timestamp ──► insert ──► unlock    │
//! │  update()  ──► write lock ──► find ──► apply patch ──► clone ──► unlock│
//! │  get()     ──► read lock  ──► clone ──► unlock                         │
//! │  list()    ──► read lock  ──► sort clones ──► unlock                   │
//! │                                                                         │
//! │  Callers only ever see clones, so a concurrent update can never be     │
//! │  observed half-applied.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use haven_core::{Booking, BookingPatch, NewBooking};

use super::Table;
use crate::clock::Clock;
use crate::error::{StoreError, StoreResult};
use crate::id::IdGenerator;

/// Repository for booking records.
///
/// ## Usage
/// ```rust,ignore
/// let repo = store.bookings();
///
/// let booking = repo.create(new_booking).await?;
/// let same = repo.get(&booking.id).await;
/// let confirmed = repo.update(&booking.id, BookingPatch::status(BookingStatus::Confirmed)).await;
/// ```
#[derive(Debug, Clone)]
pub struct BookingRepository {
    table: Arc<RwLock<Table<Booking>>>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl BookingRepository {
    /// Creates an empty repository.
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        BookingRepository {
            table: Arc::new(RwLock::new(Table::new())),
            ids,
            clock,
        }
    }

    /// Stores a validated booking.
    ///
    /// Assigns the id and `created_at`. A phone number that is blank
    /// after trimming is stored as `None`.
    ///
    /// ## Returns
    /// * `Ok(Booking)` - The stored record
    /// * `Err(StoreError::DuplicateId)` - The id generator repeated itself
    pub async fn create(&self, new_booking: NewBooking) -> StoreResult<Booking> {
        let mut table = self.table.write().await;

        let id = self.ids.next_id();
        if table.contains(&id) {
            return Err(StoreError::duplicate("booking", id));
        }

        let guest_phone = new_booking
            .guest_phone
            .map(|phone| phone.trim().to_string())
            .filter(|phone| !phone.is_empty());

        let booking = Booking {
            id,
            checkin: new_booking.checkin,
            checkout: new_booking.checkout,
            guests: new_booking.guests,
            guest_name: new_booking.guest_name,
            guest_email: new_booking.guest_email,
            guest_phone,
            total_amount: new_booking.total_amount,
            status: new_booking.status,
            metadata: new_booking.metadata,
            created_at: self.clock.now(),
        };

        table.insert(booking.clone());

        info!(
            booking_id = %booking.id,
            status = %booking.status,
            checkin = %booking.checkin,
            checkout = %booking.checkout,
            "Booking stored"
        );
        Ok(booking)
    }

    /// Gets a booking by its id.
    ///
    /// ## Returns
    /// * `Some(Booking)` - Booking found
    /// * `None` - No booking with that id
    pub async fn get(&self, id: &str) -> Option<Booking> {
        let table = self.table.read().await;
        let booking = table.get(id).cloned();
        debug!(booking_id = %id, found = booking.is_some(), "Booking lookup");
        booking
    }

    /// All bookings, newest first.
    pub async fn list(&self) -> Vec<Booking> {
        let bookings = self.table.read().await.newest_first();
        debug!(count = bookings.len(), "Listed bookings");
        bookings
    }

    /// Applies a partial update.
    ///
    /// Unknown ids change nothing and return `None`.
    pub async fn update(&self, id: &str, patch: BookingPatch) -> Option<Booking> {
        let mut table = self.table.write().await;
        let booking = table.get_mut(id)?;
        patch.apply_to(booking);

        info!(booking_id = %id, status = %booking.status, "Booking updated");
        Some(booking.clone())
    }

    /// Number of stored bookings.
    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
