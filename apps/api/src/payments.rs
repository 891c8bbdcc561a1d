//! # Mock Payment Gateway
//!
//! Stands in for a card processor. Every validated card is "captured"
//! immediately and gets a fresh reference; nothing leaves the process.
//!
//! The reference is what the reservation form stores in
//! `metadata.paymentReference` before posting a `confirmed` booking.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use haven_core::card::{CardDetails, CardInput};
use haven_core::Money;

/// Body of `POST /api/payments`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub card_number: Option<String>,
    pub expiry: Option<String>,
    pub cvc: Option<String>,
    /// Decimal amount, e.g. `"969.00"`.
    pub amount: Option<String>,
}

impl PaymentRequest {
    /// The card fields alone.
    pub fn card(&self) -> CardInput {
        CardInput {
            card_number: self.card_number.clone(),
            expiry: self.expiry.clone(),
            cvc: self.cvc.clone(),
        }
    }
}

/// Outcome of a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureStatus {
    Captured,
}

/// Response of `POST /api/payments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureReceipt {
    pub reference: String,
    pub amount: String,
    pub last4: String,
    /// Masked and grouped, e.g. `**** **** **** 4242`.
    pub card: String,
    /// `MM/YY`.
    pub expiry: String,
    pub status: CaptureStatus,
}

/// Always-approving gateway.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockPaymentGateway;

impl MockPaymentGateway {
    pub fn new() -> Self {
        MockPaymentGateway
    }

    /// Captures `amount` on an already validated card.
    pub fn capture(&self, card: &CardDetails, amount: Money) -> CaptureReceipt {
        let reference = format!("pay_{}", Uuid::new_v4().simple());

        info!(
            reference = %reference,
            amount = %amount,
            last4 = %card.last4(),
            "Mock payment captured"
        );

        CaptureReceipt {
            reference,
            amount: amount.to_decimal_string(),
            last4: card.last4().to_string(),
            card: card.masked(),
            expiry: card.expiry(),
            status: CaptureStatus::Captured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_receipt() {
        let card = CardDetails {
            number: "4242424242424242".to_string(),
            expiry_month: 12,
            expiry_year: 2030,
        };
        let gateway = MockPaymentGateway::new();

        let receipt = gateway.capture(&card, Money::from_major_minor(969, 0));
        assert!(receipt.reference.starts_with("pay_"));
        assert_eq!(receipt.amount, "969.00");
        assert_eq!(receipt.last4, "4242");
        assert_eq!(receipt.card, "**** **** **** 4242");
        assert_eq!(receipt.expiry, "12/30");

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["status"], "captured");
        assert_eq!(json["card"], "**** **** **** 4242");
        assert!(!json.to_string().contains("4242424242424242"));

        let other = gateway.capture(&card, Money::from_major_minor(969, 0));
        assert_ne!(other.reference, receipt.reference);
    }
}
