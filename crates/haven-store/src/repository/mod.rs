//! # Repository Module
//!
//! In-memory repository implementations for Haven.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  axum handler                                                          │
//! │       │                                                                 │
//! │       │  store.bookings().list()                                       │
//! │       ▼                                                                 │
//! │  BookingRepository                                                     │
//! │  ├── create(&self, new_booking)                                        │
//! │  ├── get(&self, id)                                                    │
//! │  ├── list(&self)                                                       │
//! │  └── update(&self, id, patch)                                          │
//! │       │                                                                 │
//! │       │  one RwLock acquisition per call                               │
//! │       ▼                                                                 │
//! │  Table<Booking>  (HashMap + insertion sequence)                        │
//! │                                                                         │
//! │  A relational backend can replace Table<T> behind the same methods.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`BookingRepository`](booking::BookingRepository) - Reservations
//! - [`ContactRepository`](contact::ContactRepository) - Contact messages

use std::collections::HashMap;

use chrono::{DateTime, Utc};

pub mod booking;
pub mod contact;

/// Records that carry a server-assigned creation time.
pub trait Timestamped {
    fn id(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
}

impl Timestamped for haven_core::Booking {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Timestamped for haven_core::Contact {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[derive(Debug)]
struct Row<T> {
    /// Insertion order, used to break created_at ties.
    seq: u64,
    record: T,
}

/// Keyed rows plus an insertion counter.
///
/// Not synchronized on its own; repositories wrap it in a `RwLock`.
#[derive(Debug)]
pub(crate) struct Table<T> {
    rows: HashMap<String, Row<T>>,
    next_seq: u64,
}

impl<T: Timestamped + Clone> Table<T> {
    pub(crate) fn new() -> Self {
        Table {
            rows: HashMap::new(),
            next_seq: 0,
        }
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.rows.contains_key(id)
    }

    /// Inserts a record under its own id. Caller checks for duplicates.
    pub(crate) fn insert(&mut self, record: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.rows
            .insert(record.id().to_string(), Row { seq, record });
    }

    pub(crate) fn get(&self, id: &str) -> Option<&T> {
        self.rows.get(id).map(|row| &row.record)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.rows.get_mut(id).map(|row| &mut row.record)
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    /// Clones of every record, newest first.
    ///
    /// Equal timestamps keep insertion order, earlier inserts first.
    pub(crate) fn newest_first(&self) -> Vec<T> {
        let mut rows: Vec<&Row<T>> = self.rows.values().collect();
        rows.sort_by(|a, b| {
            b.record
                .created_at()
                .cmp(&a.record.created_at())
                .then_with(|| a.seq.cmp(&b.seq))
        });
        rows.into_iter().map(|row| row.record.clone()).collect()
    }
}
