//! # haven-store: Storage Layer for Haven
//!
//! This crate provides record storage for the Haven booking backend.
//! Records live in process memory; nothing is written to disk.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Haven Data Flow                                │
//! │                                                                         │
//! │  axum handler (POST /api/bookings)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    haven-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │     Store     │    │  Repositories │    │   Sources    │  │   │
//! │  │   │  (store.rs)   │    │ (booking.rs)  │    │  id.rs       │  │   │
//! │  │   │               │    │ (contact.rs)  │    │  clock.rs    │  │   │
//! │  │   │ Built once at │◄───│               │───►│              │  │   │
//! │  │   │ startup       │    │ Table<T> +    │    │ UUID v4      │  │   │
//! │  │   │               │    │ RwLock        │    │ Utc::now     │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `Store` handle passed to handlers
//! - [`repository`] - Booking and contact repositories
//! - [`id`] - Identifier generation
//! - [`clock`] - Timestamp source
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use haven_store::Store;
//!
//! let store = Store::in_memory();
//! let booking = store.bookings().create(new_booking).await?;
//! let newest_first = store.bookings().list().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod clock;
pub mod error;
pub mod id;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{StoreError, StoreResult};
pub use id::{IdGenerator, SequentialIds, UuidGenerator};
pub use store::Store;

// Repository re-exports for convenience
pub use repository::booking::BookingRepository;
pub use repository::contact::ContactRepository;
