//! Mocked payment capture.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use haven_core::card::validate_card;
use haven_core::{Money, ValidationError};

use crate::error::ApiResult;
use crate::payments::{CaptureReceipt, PaymentRequest};
use crate::AppState;

/// `POST /api/payments`
///
/// Card fields and amount are validated together so every problem is
/// reported at once.
pub async fn capture(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PaymentRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CaptureReceipt>)> {
    let Json(request) = payload?;
    let today = state.clock.now().date_naive();

    let card = validate_card(&request.card(), today);
    let amount = validate_amount(request.amount.as_deref());

    match (card, amount) {
        (Ok(card), Ok(amount)) => {
            let receipt = state.payments.capture(&card, amount);
            Ok((StatusCode::CREATED, Json(receipt)))
        }
        (card, amount) => {
            let mut errors = card.err().unwrap_or_default();
            if let Err(e) = amount {
                errors.push(e);
            }
            Err(errors.into())
        }
    }
}

fn validate_amount(raw: Option<&str>) -> Result<Money, ValidationError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            })
        }
        Some(raw) => raw,
    };

    match Money::parse_decimal(raw) {
        Ok(amount) if !amount.is_zero() => Ok(amount),
        _ => Err(ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: "must be a positive decimal amount".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount(Some("969.00")).unwrap().cents(), 96900);
        assert!(matches!(
            validate_amount(None),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_amount(Some("0")).is_err());
        assert!(validate_amount(Some("-5")).is_err());
        assert!(validate_amount(Some("ten")).is_err());
    }
}
