//! # haven-core: Pure Business Logic for Haven
//!
//! This crate holds the booking rules of the rental site as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Haven Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Public Site / Admin Editor                   │   │
//! │  │    Gallery ──► Reservation Form ──► Payment Step ──► Contact    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ REST (JSON)                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    haven-api (axum handlers)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ haven-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │   card    │  │ validation│  │   │
//! │  │   │  Booking  │  │   quote   │  │  format   │  │   rules   │  │   │
//! │  │   │  Contact  │  │   Money   │  │   mask    │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 haven-store (In-Memory Tables)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Booking, Contact, request payloads)
//! - [`money`] - Money type with integer arithmetic
//! - [`pricing`] - Nightly price calculator
//! - [`card`] - Card number / expiry formatting for the mocked payment step
//! - [`error`] - Domain error types
//! - [`validation`] - Payload validation that reports every failing field
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use haven_core::pricing;
//!
//! let checkin = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
//! let checkout = NaiveDate::from_ymd_opt(2025, 7, 2).unwrap();
//!
//! // One night: 850 + 51 service fee + 68 taxes
//! let quote = pricing::quote_dates(checkin, checkout);
//! assert_eq!(quote.total.dollars(), 969);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod card;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError, ValidationErrors};
pub use money::Money;
pub use pricing::PriceBreakdown;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest party the property accepts.
pub const MIN_GUESTS: i64 = 1;

/// Largest party the property accepts.
///
/// ## Business Reason
/// The house sleeps ten; the reservation form offers 1-10.
pub const MAX_GUESTS: i64 = 10;
