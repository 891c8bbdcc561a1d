//! # Validation Module
//!
//! Input validation for booking, contact and status-update payloads.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Reservation form (browser)                                   │
//! │  ├── Basic format checks, price preview                                │
//! │  └── Immediate guest feedback                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: axum handler                                                 │
//! │  ├── JSON shape (deserialization)                                      │
//! │  └── THIS MODULE: field rules, every failure collected                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: haven-store                                                  │
//! │  └── Unique ids, phone normalization                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single-field validators return `ValidationResult<()>`; the payload
//! validators run all of them and return the full report.

use serde_json::Value;

use crate::error::{ValidationError, ValidationErrors};
use crate::money::Money;
use crate::pricing;
use crate::types::{
    BookingMetadata, BookingRequest, BookingStatus, ContactRequest, NewBooking, NewContact,
    StatusUpdateRequest,
};
use crate::{MAX_GUESTS, MIN_GUESTS};

/// Result type for single-field validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_NAME_LEN: usize = 200;
const MAX_EMAIL_LEN: usize = 254;
const MAX_PHONE_LEN: usize = 30;
const MAX_MESSAGE_LEN: usize = 5000;
const MAX_SPECIAL_REQUESTS_LEN: usize = 1000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required, length-limited text field. Returns the trimmed value.
pub fn validate_required_text(
    field: &str,
    value: Option<&str>,
    max: usize,
) -> ValidationResult<String> {
    let value = value.map(str::trim).unwrap_or_default();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value.to_string())
}

/// Validates an email address.
///
/// ## Rules
/// - Exactly one `@`
/// - Non-empty local part
/// - Domain with a `.` that is neither first nor last
/// - No whitespace, at most 254 characters
///
/// ## Example
/// ```rust
/// use haven_core::validation::validate_email;
///
/// assert!(validate_email("guestEmail", "ada@example.com").is_ok());
/// assert!(validate_email("guestEmail", "ada.example.com").is_err());
/// ```
pub fn validate_email(field: &str, email: &str) -> ValidationResult<()> {
    let invalid = || ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a valid email address".to_string(),
    };

    if email.len() > MAX_EMAIL_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_EMAIL_LEN,
        });
    }

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    match domain.rfind('.') {
        Some(dot) if dot > 0 && dot < domain.len() - 1 => Ok(()),
        _ => Err(invalid()),
    }
}

/// Validates an optional phone number. Blank counts as absent.
///
/// Returns the trimmed number, or `None` when nothing was entered.
pub fn validate_phone(phone: Option<&str>) -> ValidationResult<Option<String>> {
    let phone = match phone.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(phone) => phone,
    };

    if phone.len() > MAX_PHONE_LEN {
        return Err(ValidationError::TooLong {
            field: "guestPhone".to_string(),
            max: MAX_PHONE_LEN,
        });
    }

    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.'));
    if !allowed || !phone.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "guestPhone".to_string(),
            reason: "must contain only digits, spaces and + - ( ) .".to_string(),
        });
    }

    Ok(Some(phone.to_string()))
}

/// Validates `HH:MM` 24-hour time.
fn validate_arrival_time(time: &str) -> ValidationResult<()> {
    let valid = time
        .split_once(':')
        .filter(|(h, m)| h.len() == 2 && m.len() == 2)
        .and_then(|(h, m)| Some((h.parse::<u32>().ok()?, m.parse::<u32>().ok()?)))
        .is_some_and(|(h, m)| h < 24 && m < 60);

    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat {
            field: "metadata.arrivalTime".to_string(),
            reason: "must be HH:MM".to_string(),
        })
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates the party size as posted in JSON.
///
/// ## Rules
/// - Required (`null` counts as missing)
/// - A whole number, or a string holding one (`"2"` from a form select)
/// - Between MIN_GUESTS (1) and MAX_GUESTS (10) inclusive
///
/// ## Example
/// ```rust
/// use haven_core::validation::validate_guests;
/// use serde_json::json;
///
/// assert_eq!(validate_guests(Some(&json!(2))).unwrap(), 2);
/// assert_eq!(validate_guests(Some(&json!(" 4 "))).unwrap(), 4);
/// assert!(validate_guests(Some(&json!(2.5))).is_err());
/// ```
pub fn validate_guests(guests: Option<&Value>) -> ValidationResult<u32> {
    let invalid = || ValidationError::InvalidFormat {
        field: "guests".to_string(),
        reason: "must be a whole number".to_string(),
    };

    let guests = match guests {
        None | Some(Value::Null) => {
            return Err(ValidationError::Required {
                field: "guests".to_string(),
            })
        }
        Some(Value::Number(n)) => n.as_i64().ok_or_else(invalid)?,
        Some(Value::String(s)) if s.trim().is_empty() => {
            return Err(ValidationError::Required {
                field: "guests".to_string(),
            })
        }
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| invalid())?,
        Some(_) => return Err(invalid()),
    };

    if !(MIN_GUESTS..=MAX_GUESTS).contains(&guests) {
        return Err(ValidationError::OutOfRange {
            field: "guests".to_string(),
            min: MIN_GUESTS,
            max: MAX_GUESTS,
        });
    }

    Ok(guests as u32)
}

/// Validates a total amount string and returns it in canonical form.
pub fn validate_total_amount(raw: &str) -> ValidationResult<String> {
    Money::parse_decimal(raw)
        .map(|money| money.to_decimal_string())
        .map_err(|_| ValidationError::InvalidFormat {
            field: "totalAmount".to_string(),
            reason: "must be a non-negative decimal amount".to_string(),
        })
}

// =============================================================================
// Payload Validators
// =============================================================================

fn validate_metadata(metadata: &BookingMetadata, errors: &mut ValidationErrors) {
    if let Some(requests) = &metadata.special_requests {
        if requests.chars().count() > MAX_SPECIAL_REQUESTS_LEN {
            errors.push(ValidationError::TooLong {
                field: "metadata.specialRequests".to_string(),
                max: MAX_SPECIAL_REQUESTS_LEN,
            });
        }
    }
    if let Some(time) = &metadata.arrival_time {
        errors.check(validate_arrival_time(time.trim()));
    }
}

fn required_date(field: &str, raw: Option<&str>, errors: &mut ValidationErrors) -> Option<chrono::NaiveDate> {
    match raw.map(str::trim) {
        None | Some("") => {
            errors.push(ValidationError::Required {
                field: field.to_string(),
            });
            None
        }
        Some(raw) => {
            let date = pricing::parse_date(raw);
            if date.is_none() {
                errors.push(ValidationError::InvalidFormat {
                    field: field.to_string(),
                    reason: "must be a date (YYYY-MM-DD)".to_string(),
                });
            }
            date
        }
    }
}

/// Validates a booking payload, reporting every failing field.
///
/// When `totalAmount` is omitted the total is what [`pricing::quote`]
/// returns for the raw check-in and check-out values, so a timestamp
/// stay is charged the same nights the quote endpoint shows.
///
/// ## Example
/// ```rust
/// use haven_core::types::BookingRequest;
/// use haven_core::validation::validate_booking_request;
///
/// let request = BookingRequest {
///     checkin: Some("2025-07-01".into()),
///     checkout: Some("2025-07-02".into()),
///     guests: Some(serde_json::json!(2)),
///     guest_name: Some("Ada Lovelace".into()),
///     guest_email: Some("ada@example.com".into()),
///     ..Default::default()
/// };
/// let booking = validate_booking_request(&request).unwrap();
/// assert_eq!(booking.total_amount, "969.00");
///
/// let errors = validate_booking_request(&BookingRequest::default()).unwrap_err();
/// assert!(errors.has_field("guests") && errors.has_field("guestEmail"));
/// ```
pub fn validate_booking_request(request: &BookingRequest) -> Result<NewBooking, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let checkin = required_date("checkin", request.checkin.as_deref(), &mut errors);
    let checkout = required_date("checkout", request.checkout.as_deref(), &mut errors);
    if let (Some(checkin), Some(checkout)) = (checkin, checkout) {
        if checkout <= checkin {
            errors.push(ValidationError::MustBeAfter {
                field: "checkout".to_string(),
                other: "checkin".to_string(),
            });
        }
    }

    let guests = validate_guests(request.guests.as_ref())
        .map_err(|e| errors.push(e))
        .ok();

    let guest_name = validate_required_text("guestName", request.guest_name.as_deref(), MAX_NAME_LEN)
        .map_err(|e| errors.push(e))
        .ok();

    let guest_email = validate_required_text("guestEmail", request.guest_email.as_deref(), MAX_EMAIL_LEN)
        .and_then(|email| validate_email("guestEmail", &email).map(|()| email))
        .map_err(|e| errors.push(e))
        .ok();

    let guest_phone = validate_phone(request.guest_phone.as_deref())
        .map_err(|e| errors.push(e))
        .ok()
        .flatten();

    let total_amount = match request.total_amount.as_deref().map(str::trim) {
        None | Some("") => match (checkin, checkout) {
            (Some(_), Some(_)) => {
                let quote = pricing::quote(
                    request.checkin.as_deref(),
                    request.checkout.as_deref(),
                    guests.unwrap_or_default(),
                );
                Some(quote.total.to_decimal_string())
            }
            _ => None,
        },
        Some(raw) => validate_total_amount(raw).map_err(|e| errors.push(e)).ok(),
    };

    let status = match request.status.as_deref() {
        None => Some(BookingStatus::default()),
        Some(raw) => raw.parse().map_err(|e| errors.push(e)).ok(),
    };

    if let Some(metadata) = &request.metadata {
        validate_metadata(metadata, &mut errors);
    }

    match (checkin, checkout, guests, guest_name, guest_email, total_amount, status) {
        (
            Some(checkin),
            Some(checkout),
            Some(guests),
            Some(guest_name),
            Some(guest_email),
            Some(total_amount),
            Some(status),
        ) if errors.is_empty() => Ok(NewBooking {
            checkin,
            checkout,
            guests,
            guest_name,
            guest_email,
            guest_phone,
            total_amount,
            status,
            metadata: request.metadata.clone(),
        }),
        _ => Err(errors),
    }
}

/// Validates a contact-form payload, reporting every failing field.
pub fn validate_contact_request(request: &ContactRequest) -> Result<NewContact, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = validate_required_text("name", request.name.as_deref(), MAX_NAME_LEN)
        .map_err(|e| errors.push(e))
        .ok();

    let email = validate_required_text("email", request.email.as_deref(), MAX_EMAIL_LEN)
        .and_then(|email| validate_email("email", &email).map(|()| email))
        .map_err(|e| errors.push(e))
        .ok();

    let message = validate_required_text("message", request.message.as_deref(), MAX_MESSAGE_LEN)
        .map_err(|e| errors.push(e))
        .ok();

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) => Ok(NewContact {
            name,
            email,
            message,
        }),
        _ => Err(errors),
    }
}

/// Validates the body of a status update.
pub fn validate_status_update(request: &StatusUpdateRequest) -> Result<BookingStatus, ValidationErrors> {
    match request.status.as_deref().map(str::trim) {
        None | Some("") => Err(ValidationError::Required {
            field: "status".to_string(),
        }
        .into()),
        Some(raw) => raw.parse::<BookingStatus>().map_err(ValidationErrors::from),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn valid_request() -> BookingRequest {
        BookingRequest {
            checkin: Some("2025-07-01".to_string()),
            checkout: Some("2025-07-04".to_string()),
            guests: Some(json!(4)),
            guest_name: Some("  Ada Lovelace ".to_string()),
            guest_email: Some("ada@example.com".to_string()),
            guest_phone: None,
            total_amount: Some("2907".to_string()),
            status: Some("confirmed".to_string()),
            metadata: None,
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "ada@example.com").is_ok());
        assert!(validate_email("email", "a.b+c@mail.example.co.uk").is_ok());

        assert!(validate_email("email", "ada.example.com").is_err());
        assert!(validate_email("email", "@example.com").is_err());
        assert!(validate_email("email", "ada@example").is_err());
        assert!(validate_email("email", "ada@.com").is_err());
        assert!(validate_email("email", "ada@example.").is_err());
        assert!(validate_email("email", "ada@@example.com").is_err());
        assert!(validate_email("email", "ada lovelace@example.com").is_err());
    }

    #[test]
    fn test_validate_guests() {
        assert_eq!(validate_guests(Some(&json!(1))).unwrap(), 1);
        assert_eq!(validate_guests(Some(&json!(10))).unwrap(), 10);

        for bad in [0, -1, 11, 100] {
            let err = validate_guests(Some(&json!(bad))).unwrap_err();
            assert_eq!(err.to_string(), "guests must be between 1 and 10");
        }
        assert_eq!(validate_guests(None).unwrap_err().field(), "guests");
        assert!(matches!(
            validate_guests(Some(&Value::Null)),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_guests_from_form_strings() {
        assert_eq!(validate_guests(Some(&json!("2"))).unwrap(), 2);
        assert_eq!(validate_guests(Some(&json!(" 10 "))).unwrap(), 10);
        assert!(matches!(
            validate_guests(Some(&json!("11"))),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_guests(Some(&json!(""))),
            Err(ValidationError::Required { .. })
        ));

        for bad in [json!("two"), json!(2.5), json!("2.5"), json!(true), json!([2])] {
            let err = validate_guests(Some(&bad)).unwrap_err();
            assert_eq!(err.field(), "guests");
            assert_eq!(err.to_string(), "guests has invalid format: must be a whole number");
        }
    }

    #[test]
    fn test_string_guests_reported_with_other_fields() {
        let request = BookingRequest {
            guests: Some(json!("lots")),
            guest_name: None,
            guest_email: Some("nope".to_string()),
            ..valid_request()
        };
        let errors = validate_booking_request(&request).unwrap_err();
        assert_eq!(errors.len(), 3);
        for field in ["guests", "guestName", "guestEmail"] {
            assert!(errors.has_field(field), "missing error for {field}");
        }
    }

    #[test]
    fn test_validate_phone() {
        assert_eq!(validate_phone(None).unwrap(), None);
        assert_eq!(validate_phone(Some("   ")).unwrap(), None);
        assert_eq!(
            validate_phone(Some(" +1 (555) 010-0100 ")).unwrap().as_deref(),
            Some("+1 (555) 010-0100")
        );
        assert!(validate_phone(Some("call me")).is_err());
        assert!(validate_phone(Some("+-()")).is_err());
    }

    #[test]
    fn test_validate_total_amount() {
        assert_eq!(validate_total_amount("969").unwrap(), "969.00");
        assert_eq!(validate_total_amount("0").unwrap(), "0.00");
        assert!(validate_total_amount("-1").is_err());
        assert!(validate_total_amount("12.345").is_err());
    }

    #[test]
    fn test_valid_booking_request() {
        let booking = validate_booking_request(&valid_request()).unwrap();
        assert_eq!(booking.checkin, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert_eq!(booking.guests, 4);
        assert_eq!(booking.guest_name, "Ada Lovelace");
        assert_eq!(booking.guest_phone, None);
        assert_eq!(booking.total_amount, "2907.00");
        assert_eq!(booking.status, BookingStatus::Confirmed);
    }

    #[test]
    fn test_booking_status_defaults_to_pending() {
        let request = BookingRequest {
            status: None,
            ..valid_request()
        };
        assert_eq!(
            validate_booking_request(&request).unwrap().status,
            BookingStatus::Pending
        );
    }

    #[test]
    fn test_total_computed_when_omitted() {
        let request = BookingRequest {
            total_amount: None,
            ..valid_request()
        };
        // 3 nights: 2550 + 153 + 204
        assert_eq!(validate_booking_request(&request).unwrap().total_amount, "2907.00");
    }

    #[test]
    fn test_computed_total_matches_quote_for_timestamps() {
        let request = BookingRequest {
            checkin: Some("2025-07-01T10:00:00Z".to_string()),
            checkout: Some("2025-07-02T12:00:00Z".to_string()),
            total_amount: None,
            ..valid_request()
        };
        let booking = validate_booking_request(&request).unwrap();

        let quote = pricing::quote(request.checkin.as_deref(), request.checkout.as_deref(), 4);
        assert_eq!(quote.nights, 2);
        assert_eq!(booking.total_amount, quote.total.to_decimal_string());
        assert_eq!(booking.total_amount, "1938.00");
        assert_eq!(booking.checkout, NaiveDate::from_ymd_opt(2025, 7, 2).unwrap());
    }

    #[test]
    fn test_every_failing_field_is_reported() {
        let request = BookingRequest {
            checkin: Some("2025-07-04".to_string()),
            checkout: Some("2025-07-01".to_string()),
            guests: Some(json!(12)),
            guest_name: Some("".to_string()),
            guest_email: Some("nope".to_string()),
            guest_phone: Some("call me".to_string()),
            total_amount: Some("-5".to_string()),
            status: Some("cancelled".to_string()),
            metadata: Some(BookingMetadata {
                arrival_time: Some("25:00".to_string()),
                ..BookingMetadata::default()
            }),
        };

        let errors = validate_booking_request(&request).unwrap_err();
        for field in [
            "checkout",
            "guests",
            "guestName",
            "guestEmail",
            "guestPhone",
            "totalAmount",
            "status",
            "metadata.arrivalTime",
        ] {
            assert!(errors.has_field(field), "missing error for {field}");
        }
        assert_eq!(errors.len(), 8);
    }

    #[test]
    fn test_missing_fields_are_required() {
        let errors = validate_booking_request(&BookingRequest::default()).unwrap_err();
        for field in ["checkin", "checkout", "guests", "guestName", "guestEmail"] {
            assert!(errors.has_field(field), "missing error for {field}");
        }
        assert!(!errors.has_field("totalAmount"));
    }

    #[test]
    fn test_unparseable_date() {
        let request = BookingRequest {
            checkin: Some("July 1st".to_string()),
            ..valid_request()
        };
        let errors = validate_booking_request(&request).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.has_field("checkin"));
    }

    #[test]
    fn test_validate_contact_request() {
        let contact = validate_contact_request(&ContactRequest {
            name: Some("Grace".to_string()),
            email: Some("grace@example.com".to_string()),
            message: Some("Is the pool heated?".to_string()),
        })
        .unwrap();
        assert_eq!(contact.name, "Grace");

        let errors = validate_contact_request(&ContactRequest {
            name: None,
            email: Some("grace".to_string()),
            message: Some("  ".to_string()),
        })
        .unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_validate_status_update() {
        let ok = StatusUpdateRequest {
            status: Some("confirmed".to_string()),
        };
        assert_eq!(validate_status_update(&ok).unwrap(), BookingStatus::Confirmed);

        let missing = validate_status_update(&StatusUpdateRequest::default()).unwrap_err();
        assert_eq!(missing.to_string(), "status is required");

        let unknown = StatusUpdateRequest {
            status: Some("archived".to_string()),
        };
        assert!(validate_status_update(&unknown).unwrap_err().has_field("status"));
    }
}
