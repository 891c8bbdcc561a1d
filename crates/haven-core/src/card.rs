//! # Card Module
//!
//! Formatting and checks for the card fields of the (mocked) payment step.
//!
//! Nothing here talks to a gateway. The reservation form reformats input
//! as the guest types, and the API re-checks the same rules before it
//! issues a mock capture reference.
//!
//! ```text
//! raw input            formatted
//! ───────────────────  ──────────────────────
//! "4242424242424242"   "4242 4242 4242 4242"
//! "1227"               "12/27"
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ValidationError, ValidationErrors};

/// Number of digits accepted in a card number.
pub const CARD_NUMBER_DIGITS: usize = 16;

/// Raw card fields as posted by the payment form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CardInput {
    pub card_number: Option<String>,
    /// `MM/YY` or `MMYY`.
    pub expiry: Option<String>,
    pub cvc: Option<String>,
}

/// Card details that passed validation. The CVC is not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetails {
    /// Digits only.
    pub number: String,
    pub expiry_month: u32,
    /// Four-digit year.
    pub expiry_year: i32,
}

impl CardDetails {
    /// Last four digits, for receipts.
    pub fn last4(&self) -> &str {
        &self.number[self.number.len().saturating_sub(4)..]
    }

    /// Grouped number with all but the last four digits hidden.
    pub fn masked(&self) -> String {
        mask_card_number(&self.number)
    }

    /// Expiry as `MM/YY`.
    pub fn expiry(&self) -> String {
        format_expiry(&format!("{:02}{:02}", self.expiry_month, self.expiry_year % 100))
    }
}

fn digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Groups up to 16 digits in blocks of four, dropping everything else.
pub fn format_card_number(raw: &str) -> String {
    let digits: Vec<char> = digits(raw).chars().take(CARD_NUMBER_DIGITS).collect();
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats up to four expiry digits as `MM/YY`.
///
/// Two digits or fewer are returned as typed, so the slash only appears
/// once the guest starts on the year.
pub fn format_expiry(raw: &str) -> String {
    let digits: String = digits(raw).chars().take(4).collect();
    if digits.len() > 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Formats like [`format_card_number`], then masks all but the last four digits.
pub fn mask_card_number(raw: &str) -> String {
    let formatted = format_card_number(raw);
    let hidden = formatted
        .chars()
        .filter(char::is_ascii_digit)
        .count()
        .saturating_sub(4);

    let mut seen = 0;
    formatted
        .chars()
        .map(|c| {
            if !c.is_ascii_digit() {
                return c;
            }
            seen += 1;
            if seen <= hidden {
                '*'
            } else {
                c
            }
        })
        .collect()
}

/// Validates the card fields against `today`.
///
/// ## Rules
/// - `cardNumber`: exactly 16 digits once spaces/dashes are removed
/// - `expiry`: month 01-12, not before the current month
/// - `cvc`: 3 or 4 digits
///
/// Every failing field is reported.
pub fn validate_card(input: &CardInput, today: NaiveDate) -> Result<CardDetails, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let number = match input.card_number.as_deref().map(str::trim) {
        None | Some("") => {
            errors.push(ValidationError::Required {
                field: "cardNumber".to_string(),
            });
            None
        }
        Some(raw) => {
            let only_allowed = raw.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-');
            let number = digits(raw);
            if !only_allowed || number.len() != CARD_NUMBER_DIGITS {
                errors.push(ValidationError::InvalidFormat {
                    field: "cardNumber".to_string(),
                    reason: format!("must contain {} digits", CARD_NUMBER_DIGITS),
                });
                None
            } else {
                Some(number)
            }
        }
    };

    let expiry = match input.expiry.as_deref().map(str::trim) {
        None | Some("") => {
            errors.push(ValidationError::Required {
                field: "expiry".to_string(),
            });
            None
        }
        Some(raw) => match parse_expiry(raw) {
            None => {
                errors.push(ValidationError::InvalidFormat {
                    field: "expiry".to_string(),
                    reason: "must be MM/YY".to_string(),
                });
                None
            }
            Some((month, year)) => {
                if (year, month) < (today.year(), today.month()) {
                    errors.push(ValidationError::Expired {
                        field: "expiry".to_string(),
                    });
                    None
                } else {
                    Some((month, year))
                }
            }
        },
    };

    match input.cvc.as_deref().map(str::trim) {
        None | Some("") => errors.push(ValidationError::Required {
            field: "cvc".to_string(),
        }),
        Some(cvc) => {
            if !(3..=4).contains(&cvc.len()) || !cvc.chars().all(|c| c.is_ascii_digit()) {
                errors.push(ValidationError::InvalidFormat {
                    field: "cvc".to_string(),
                    reason: "must be 3 or 4 digits".to_string(),
                });
            }
        }
    }

    match (number, expiry) {
        (Some(number), Some((expiry_month, expiry_year))) if errors.is_empty() => Ok(CardDetails {
            number,
            expiry_month,
            expiry_year,
        }),
        _ => Err(errors),
    }
}

fn parse_expiry(raw: &str) -> Option<(u32, i32)> {
    let allowed = raw.chars().all(|c| c.is_ascii_digit() || c == '/' || c == ' ');
    let digits = digits(raw);
    if !allowed || digits.len() != 4 {
        return None;
    }

    let month: u32 = digits[..2].parse().ok()?;
    let year: i32 = digits[2..].parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some((month, 2000 + year))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn input(number: &str, expiry: &str, cvc: &str) -> CardInput {
        CardInput {
            card_number: Some(number.to_string()),
            expiry: Some(expiry.to_string()),
            cvc: Some(cvc.to_string()),
        }
    }

    #[test]
    fn test_format_card_number() {
        assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("4242-4242-42"), "4242 4242 42");
        assert_eq!(format_card_number("42424242424242429999"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("abc"), "");
    }

    #[test]
    fn test_format_expiry() {
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12"), "12");
        assert_eq!(format_expiry("122"), "12/2");
        assert_eq!(format_expiry("1227"), "12/27");
        assert_eq!(format_expiry("12/279"), "12/27");
    }

    #[test]
    fn test_mask_card_number() {
        assert_eq!(mask_card_number("4242 4242 4242 4242"), "**** **** **** 4242");
        assert_eq!(mask_card_number("4242-4242-4242-1881"), "**** **** **** 1881");
        assert_eq!(mask_card_number("123"), "123");
    }

    #[test]
    fn test_validate_card_ok() {
        let card = validate_card(&input("4242 4242 4242 4242", "12/27", "123"), today()).unwrap();
        assert_eq!(card.number, "4242424242424242");
        assert_eq!(card.expiry_month, 12);
        assert_eq!(card.expiry_year, 2027);
        assert_eq!(card.last4(), "4242");
        assert_eq!(card.masked(), "**** **** **** 4242");
        assert_eq!(card.expiry(), "12/27");
    }

    #[test]
    fn test_card_details_expiry_pads_month() {
        let card = validate_card(&input("4000056655665556", "0731", "123"), today()).unwrap();
        assert_eq!(card.expiry(), "07/31");
        assert_eq!(card.masked(), "**** **** **** 5556");
    }

    #[test]
    fn test_validate_card_current_month_is_valid() {
        assert!(validate_card(&input("4242424242424242", "06/25", "1234"), today()).is_ok());
    }

    #[test]
    fn test_validate_card_reports_every_field() {
        let errors = validate_card(&input("4242", "13/27", "12"), today()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.has_field("cardNumber"));
        assert!(errors.has_field("expiry"));
        assert!(errors.has_field("cvc"));

        let errors = validate_card(&CardInput::default(), today()).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_validate_card_expired() {
        let errors = validate_card(&input("4242424242424242", "05/25", "123"), today()).unwrap_err();
        assert_eq!(
            errors.errors(),
            &[ValidationError::Expired {
                field: "expiry".to_string()
            }]
        );
    }
}
