//! # Pricing Calculator
//!
//! Turns a stay (check-in, check-out, guests) into a price breakdown.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  nights      = ceil(checkout - checkin) in whole days                   │
//! │  subtotal    = 850 × nights                                             │
//! │  service fee = round(subtotal × 6%)      ← rounded on its own           │
//! │  taxes       = round(subtotal × 8%)      ← rounded on its own           │
//! │  total       = subtotal + service fee + taxes                           │
//! │                                                                         │
//! │  Missing / unparseable date, or checkout <= checkin  →  everything 0    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The guest count does not change the price; it is part of the signature
//! because the reservation form always sends it.
//!
//! Everything here is pure: the same input always gives the same output.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use ts_rs::TS;

use crate::money::{serialize_decimal, Money};
use crate::types::Rate;

/// Nightly base rate in whole currency units.
pub const NIGHTLY_RATE: Money = Money::from_major_minor(850, 0);

/// Service fee, 6%.
pub const SERVICE_FEE_RATE: Rate = Rate::from_bps(600);

/// Taxes, 8%.
pub const TAX_RATE: Rate = Rate::from_bps(800);

const SECONDS_PER_DAY: i64 = 86_400;

/// Itemized price of a stay.
///
/// Amounts serialize as decimal strings (`"969.00"`), the same form a
/// stored booking's `totalAmount` takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub nights: i64,
    #[serde(serialize_with = "serialize_decimal")]
    #[ts(type = "string")]
    pub nightly_rate: Money,
    #[serde(serialize_with = "serialize_decimal")]
    #[ts(type = "string")]
    pub subtotal: Money,
    #[serde(serialize_with = "serialize_decimal")]
    #[ts(type = "string")]
    pub service_fee: Money,
    #[serde(serialize_with = "serialize_decimal")]
    #[ts(type = "string")]
    pub taxes: Money,
    #[serde(serialize_with = "serialize_decimal")]
    #[ts(type = "string")]
    pub total: Money,
}

impl PriceBreakdown {
    /// The breakdown of an invalid or empty range.
    pub const fn empty() -> Self {
        PriceBreakdown {
            nights: 0,
            nightly_rate: NIGHTLY_RATE,
            subtotal: Money::zero(),
            service_fee: Money::zero(),
            taxes: Money::zero(),
            total: Money::zero(),
        }
    }

    fn for_nights(nights: i64) -> Self {
        if nights <= 0 {
            return PriceBreakdown::empty();
        }

        let subtotal = NIGHTLY_RATE * nights;
        let service_fee = subtotal.apply_rate_whole(SERVICE_FEE_RATE);
        let taxes = subtotal.apply_rate_whole(TAX_RATE);

        PriceBreakdown {
            nights,
            nightly_rate: NIGHTLY_RATE,
            subtotal,
            service_fee,
            taxes,
            total: subtotal + service_fee + taxes,
        }
    }
}

/// Parses a stay boundary.
///
/// Accepts a plain date (`2025-07-01`, read as midnight) or an RFC 3339
/// timestamp (`2025-07-01T15:00:00Z`, converted to UTC).
pub fn parse_instant(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.naive_utc())
}

/// Parses a stay boundary down to its calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    parse_instant(raw).map(|dt| dt.date())
}

/// Whole nights between two instants, rounding partial days up.
///
/// Returns 0 when `checkout <= checkin`.
pub fn nights_between(checkin: NaiveDateTime, checkout: NaiveDateTime) -> i64 {
    let seconds = (checkout - checkin).num_seconds();
    if seconds <= 0 {
        return 0;
    }
    (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
}

/// Price breakdown for raw form values.
///
/// ## Example
/// ```rust
/// use haven_core::pricing::quote;
///
/// let q = quote(Some("2025-07-01"), Some("2025-07-04"), 2);
/// assert_eq!(q.nights, 3);
/// assert_eq!(q.total.dollars(), 2550 + 153 + 204);
///
/// assert!(quote(Some("2025-07-04"), Some("2025-07-01"), 2).total.is_zero());
/// assert!(quote(None, Some("2025-07-01"), 2).total.is_zero());
/// ```
pub fn quote(checkin: Option<&str>, checkout: Option<&str>, _guests: u32) -> PriceBreakdown {
    match (checkin.and_then(parse_instant), checkout.and_then(parse_instant)) {
        (Some(checkin), Some(checkout)) => {
            PriceBreakdown::for_nights(nights_between(checkin, checkout))
        }
        _ => PriceBreakdown::empty(),
    }
}

/// Price breakdown for already-parsed calendar dates.
pub fn quote_dates(checkin: NaiveDate, checkout: NaiveDate) -> PriceBreakdown {
    PriceBreakdown::for_nights((checkout - checkin).num_days())
}

/// Total price only; zero for an invalid range.
pub fn calculate_total(checkin: Option<&str>, checkout: Option<&str>, guests: u32) -> Money {
    quote(checkin, checkout, guests).total
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_one_night() {
        let q = quote(Some("2025-07-01"), Some("2025-07-02"), 2);
        assert_eq!(q.nights, 1);
        assert_eq!(q.subtotal.dollars(), 850);
        assert_eq!(q.service_fee.dollars(), 51);
        assert_eq!(q.taxes.dollars(), 68);
        assert_eq!(q.total, Money::from_major_minor(969, 0));
    }

    #[test]
    fn test_week() {
        let q = quote_dates(date(2025, 8, 1), date(2025, 8, 8));
        assert_eq!(q.nights, 7);
        assert_eq!(q.subtotal.dollars(), 5950);
        assert_eq!(q.service_fee.dollars(), 357);
        assert_eq!(q.taxes.dollars(), 476);
        assert_eq!(q.total.dollars(), 6783);
    }

    #[test]
    fn test_invalid_ranges_are_zero() {
        assert!(calculate_total(Some("2025-07-02"), Some("2025-07-02"), 2).is_zero());
        assert!(calculate_total(Some("2025-07-03"), Some("2025-07-02"), 2).is_zero());
        assert!(calculate_total(None, None, 2).is_zero());
        assert!(calculate_total(Some("not a date"), Some("2025-07-02"), 2).is_zero());
        assert!(calculate_total(Some(""), Some("2025-07-02"), 2).is_zero());
        assert!(quote_dates(date(2025, 7, 2), date(2025, 7, 1)).total.is_zero());
    }

    #[test]
    fn test_partial_day_rounds_up() {
        let q = quote(
            Some("2025-07-01T15:00:00Z"),
            Some("2025-07-03T11:00:00Z"),
            2,
        );
        // 1 day 20 hours → 2 nights
        assert_eq!(q.nights, 2);
        assert_eq!(q.total.dollars(), 1938);
    }

    #[test]
    fn test_rfc3339_offsets_normalize_to_utc() {
        let checkin = parse_instant("2025-07-01T02:00:00+02:00").unwrap();
        assert_eq!(checkin.date(), date(2025, 7, 1));
        assert_eq!(parse_date("2025-07-01T23:30:00-02:00"), Some(date(2025, 7, 2)));
    }

    #[test]
    fn test_guest_count_does_not_change_price() {
        let one = calculate_total(Some("2025-07-01"), Some("2025-07-03"), 1);
        let ten = calculate_total(Some("2025-07-01"), Some("2025-07-03"), 10);
        assert_eq!(one, ten);
    }

    #[test]
    fn test_idempotent() {
        let a = quote(Some("2025-12-20"), Some("2026-01-02"), 6);
        let b = quote(Some("2025-12-20"), Some("2026-01-02"), 6);
        assert_eq!(a, b);
        assert_eq!(a.nights, 13);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(quote_dates(date(2025, 7, 1), date(2025, 7, 2))).unwrap();
        assert_eq!(json["nights"], 1);
        assert_eq!(json["nightlyRate"], "850.00");
        assert_eq!(json["subtotal"], "850.00");
        assert_eq!(json["serviceFee"], "51.00");
        assert_eq!(json["taxes"], "68.00");
        assert_eq!(json["total"], "969.00");

        let empty = serde_json::to_value(PriceBreakdown::empty()).unwrap();
        assert_eq!(empty["total"], "0.00");
    }
}
