//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    850 × 3 × 0.06 = 153.00000000000003                                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Basis Points                             │
//! │    255000 cents × 600 bps / 1000000 = 153 whole units, exactly          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use haven_core::money::Money;
//!
//! let rate = Money::from_major_minor(850, 0);
//! let three_nights = rate * 3;
//! assert_eq!(three_nights.to_decimal_string(), "2550.00");
//!
//! let parsed = Money::parse_decimal("969.5").unwrap();
//! assert_eq!(parsed.cents(), 96950);
//! ```

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::Rate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Subtraction stays total; validation rejects negatives
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use haven_core::money::Money;
    ///
    /// let fee = Money::from_cents(5100);
    /// assert_eq!(fee.dollars(), 51);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -5.50, not -4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a percentage rate and rounds half up to whole major units.
    ///
    /// Service fee and taxes are quoted in whole currency units, so the
    /// rounding happens once on the exact product rather than on an
    /// already cent-rounded value.
    ///
    /// ## Example
    /// ```rust
    /// use haven_core::money::Money;
    /// use haven_core::types::Rate;
    ///
    /// // 12.50 at 10% = 1.25 → 1
    /// let fee = Money::from_cents(1250).apply_rate_whole(Rate::from_bps(1000));
    /// assert_eq!(fee.cents(), 100);
    /// ```
    pub fn apply_rate_whole(&self, rate: Rate) -> Money {
        // i128 so large subtotals cannot overflow the intermediate product
        let major = (self.0 as i128 * rate.bps() as i128 + 500_000) / 1_000_000;
        Money::from_cents((major * 100) as i64)
    }

    /// Parses a non-negative decimal string such as `"969"` or `"969.50"`.
    ///
    /// ## Rules
    /// - Digits, optionally followed by `.` and one or two digits
    /// - No sign, no thousands separators, no exponent
    pub fn parse_decimal(raw: &str) -> CoreResult<Money> {
        let trimmed = raw.trim();
        let invalid = || CoreError::InvalidAmount {
            value: raw.to_string(),
        };

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => {
                if fraction.is_empty() {
                    return Err(invalid());
                }
                (whole, fraction)
            }
            None => (trimmed, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) || fraction.len() > 2 {
            return Err(invalid());
        }

        let major: i64 = whole.parse().map_err(|_| invalid())?;
        let minor: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .map(Money::from_cents)
            .ok_or_else(invalid)
    }

    /// Formats as a plain decimal string with two fraction digits.
    ///
    /// This is the wire form of `Booking.total_amount`.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

/// Serializes money as its decimal wire string, e.g. `"969.00"`.
///
/// For `#[serde(serialize_with)]` on fields that share a payload with
/// `totalAmount`, so one response never mixes cents and decimals.
pub fn serialize_decimal<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&money.to_decimal_string())
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money with a currency symbol, e.g. `$969.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by a count (nights).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
