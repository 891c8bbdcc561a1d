//! # Domain Types
//!
//! Core domain types used throughout Haven.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Booking      │   │    Contact      │   │      Rate       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  bps (u32)      │       │
//! │  │  checkin/out    │   │  name, email    │   │  600 = 6%       │       │
//! │  │  guests 1..=10  │   │  message        │   └─────────────────┘       │
//! │  │  total_amount   │   └─────────────────┘                              │
//! │  │  status         │   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  metadata       │   │ BookingStatus   │   │ BookingMetadata │       │
//! │  └─────────────────┘   │  Pending        │   │ special_requests│       │
//! │                        │  Confirmed      │   │ payment_ref     │       │
//! │                        └─────────────────┘   │ arrival_time    │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Request vs. Record
//! `*Request` types mirror the raw JSON a client posts: every field is
//! optional and loosely typed so validation can report all problems at
//! once. `New*` types are what validation produces and what the store
//! accepts. `Booking` / `Contact` are stored records.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Rate
// =============================================================================

/// A percentage rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 600 bps = 6%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Booking Status
// =============================================================================

/// The status of a reservation.
///
/// Lifecycle: created as `Pending` (or directly `Confirmed` once the
/// mocked payment step succeeded); later moved `Pending → Confirmed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Awaiting payment / owner confirmation.
    #[default]
    Pending,
    /// Paid and confirmed; triggers a guest notification on creation.
    Confirmed,
}

impl BookingStatus {
    /// Every accepted status, in lifecycle order.
    pub const ALL: [BookingStatus; 2] = [BookingStatus::Pending, BookingStatus::Confirmed];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
        }
    }

    /// Status names for error messages.
    pub fn allowed() -> Vec<String> {
        Self::ALL.iter().map(|s| s.as_str().to_string()).collect()
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            _ => Err(ValidationError::NotAllowed {
                field: "status".to_string(),
                allowed: BookingStatus::allowed(),
            }),
        }
    }
}

// =============================================================================
// Booking Metadata
// =============================================================================

/// Optional structured extras attached to a booking.
///
/// The shape is closed: unknown keys are rejected when the JSON is parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BookingMetadata {
    /// Free text from the reservation form.
    pub special_requests: Option<String>,

    /// Reference returned by the payment step.
    pub payment_reference: Option<String>,

    /// Expected arrival, `HH:MM` 24h.
    pub arrival_time: Option<String>,
}

// =============================================================================
// Booking
// =============================================================================

/// A stored reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique identifier, assigned by the store.
    pub id: String,

    #[ts(as = "String")]
    pub checkin: NaiveDate,

    #[ts(as = "String")]
    pub checkout: NaiveDate,

    /// Party size, 1-10.
    pub guests: u32,

    pub guest_name: String,

    pub guest_email: String,

    /// `None` when the guest left the field empty.
    pub guest_phone: Option<String>,

    /// Non-negative decimal string, e.g. `"969.00"`.
    pub total_amount: String,

    pub status: BookingStatus,

    pub metadata: Option<BookingMetadata>,

    /// When the booking was stored (server clock).
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Number of nights between check-in and check-out.
    pub fn nights(&self) -> i64 {
        (self.checkout - self.checkin).num_days().max(0)
    }

    /// Parsed total; `None` only if the stored string was never validated.
    pub fn total(&self) -> Option<Money> {
        Money::parse_decimal(&self.total_amount).ok()
    }
}

/// A validated booking ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub guests: u32,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    pub total_amount: String,
    pub status: BookingStatus,
    pub metadata: Option<BookingMetadata>,
}

/// Partial update for a stored booking.
///
/// Status is the only mutable field after creation. `None` leaves the
/// booking unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingPatch {
    pub status: Option<BookingStatus>,
}

impl BookingPatch {
    /// Patch that only changes the status.
    pub fn status(status: BookingStatus) -> Self {
        BookingPatch {
            status: Some(status),
        }
    }

    /// Merges the set fields into `booking`.
    pub fn apply_to(self, booking: &mut Booking) {
        if let Some(status) = self.status {
            booking.status = status;
        }
    }
}

/// Raw booking payload as posted by the reservation form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub checkin: Option<String>,
    pub checkout: Option<String>,
    /// A number, or a numeric string as HTML selects post it.
    /// Checked by `validate_guests` so a bad value is reported per field.
    #[ts(type = "number | string | null")]
    pub guests: Option<serde_json::Value>,
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    /// Client-computed total; computed server-side when omitted.
    pub total_amount: Option<String>,
    /// Defaults to `pending`.
    pub status: Option<String>,
    pub metadata: Option<BookingMetadata>,
}

/// Body of `PATCH /api/bookings/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusUpdateRequest {
    pub status: Option<String>,
}

// =============================================================================
// Contact
// =============================================================================

/// A stored contact-form message. Write-once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// A validated contact message ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Raw contact-form payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_booking() -> Booking {
        Booking {
            id: "b-1".to_string(),
            checkin: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            checkout: NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
            guests: 4,
            guest_name: "Ada Lovelace".to_string(),
            guest_email: "ada@example.com".to_string(),
            guest_phone: None,
            total_amount: "2907.00".to_string(),
            status: BookingStatus::Pending,
            metadata: None,
            created_at: DateTime::<Utc>::default(),
        }
    }

    #[test]
    fn test_status_default_and_parse() {
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
        assert_eq!("confirmed".parse::<BookingStatus>().unwrap(), BookingStatus::Confirmed);
        assert_eq!(" Pending ".parse::<BookingStatus>().unwrap(), BookingStatus::Pending);

        let err = "cancelled".parse::<BookingStatus>().unwrap_err();
        assert_eq!(err.field(), "status");
    }

    #[test]
    fn test_booking_serializes_camel_case() {
        let json = serde_json::to_value(sample_booking()).unwrap();
        assert_eq!(json["checkin"], "2025-07-01");
        assert_eq!(json["guestName"], "Ada Lovelace");
        assert_eq!(json["guestPhone"], serde_json::Value::Null);
        assert_eq!(json["status"], "pending");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_booking_nights_and_total() {
        let booking = sample_booking();
        assert_eq!(booking.nights(), 3);
        assert_eq!(booking.total().unwrap().cents(), 290700);
    }

    #[test]
    fn test_patch_never_clears_fields() {
        let mut booking = sample_booking();
        booking.guest_phone = Some("+1 555 0100".to_string());
        booking.metadata = Some(BookingMetadata {
            special_requests: Some("Crib please".to_string()),
            ..BookingMetadata::default()
        });

        BookingPatch::status(BookingStatus::Confirmed).apply_to(&mut booking);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.guest_phone.as_deref(), Some("+1 555 0100"));

        let before = booking.clone();
        BookingPatch::default().apply_to(&mut booking);
        assert_eq!(booking, before);
        assert_eq!(
            booking.metadata.unwrap().special_requests.as_deref(),
            Some("Crib please")
        );
    }

    #[test]
    fn test_metadata_rejects_unknown_keys() {
        let ok: Result<BookingMetadata, _> =
            serde_json::from_str(r#"{"specialRequests":"late check-in"}"#);
        assert!(ok.is_ok());

        let unknown: Result<BookingMetadata, _> = serde_json::from_str(r#"{"anything":"goes"}"#);
        assert!(unknown.is_err());
    }
}
