//! # Guest Notifier
//!
//! Sends the booking confirmation to the guest once a booking is stored
//! as `confirmed`.
//!
//! ```text
//! POST /api/bookings (status: confirmed)
//!        │
//!        ▼
//!   store.create() ──► Notifier::send_confirmation(&booking) ──► bool
//!                                                                  │
//!                              false ──► warn! and carry on ◄──────┘
//! ```
//!
//! A failed notification never fails the request: the booking is already
//! stored when the notifier runs.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use haven_core::Booking;

use crate::config::{ApiConfig, NotifierKind};

/// Delivery channel for guest confirmations.
#[async_trait]
pub trait Notifier: Send + Sync + fmt::Debug {
    /// Returns `true` when the confirmation was handed off.
    async fn send_confirmation(&self, booking: &Booking) -> bool;
}

/// Builds the notifier selected in the configuration.
pub fn from_config(config: &ApiConfig) -> Arc<dyn Notifier> {
    match config.notifier_kind() {
        Ok(NotifierKind::Log) => Arc::new(LogNotifier::new(config.property_name.clone())),
        Ok(NotifierKind::Disabled) | Err(_) => Arc::new(DisabledNotifier),
    }
}

/// Renders the plain-text confirmation for a booking.
pub fn render_confirmation(property_name: &str, booking: &Booking) -> String {
    let nights = booking.nights();
    let total = booking
        .total()
        .map(|total| total.to_string())
        .unwrap_or_else(|| booking.total_amount.clone());

    format!(
        "Hi {name},\n\
         \n\
         Your stay at {property} is confirmed.\n\
         \n\
         Check-in:  {checkin}\n\
         Check-out: {checkout}\n\
         Nights:    {nights}\n\
         Guests:    {guests}\n\
         Total:     {total}\n\
         \n\
         Booking reference: {id}\n",
        name = booking.guest_name,
        property = property_name,
        checkin = booking.checkin,
        checkout = booking.checkout,
        nights = nights,
        guests = booking.guests,
        total = total,
        id = booking.id,
    )
}

/// Writes the confirmation to the log instead of sending mail.
#[derive(Debug, Clone)]
pub struct LogNotifier {
    property_name: String,
}

impl LogNotifier {
    pub fn new(property_name: impl Into<String>) -> Self {
        LogNotifier {
            property_name: property_name.into(),
        }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_confirmation(&self, booking: &Booking) -> bool {
        let body = render_confirmation(&self.property_name, booking);
        info!(
            booking_id = %booking.id,
            to = %booking.guest_email,
            "Booking confirmation\n{}",
            body
        );
        true
    }
}

/// Sends nothing and reports that nothing was sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledNotifier;

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn send_confirmation(&self, _booking: &Booking) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use haven_core::BookingStatus;

    fn confirmed_booking() -> Booking {
        Booking {
            id: "bk-7".to_string(),
            checkin: NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
            checkout: NaiveDate::from_ymd_opt(2025, 9, 13).unwrap(),
            guests: 3,
            guest_name: "Grace Hopper".to_string(),
            guest_email: "grace@example.com".to_string(),
            guest_phone: None,
            total_amount: "2907.00".to_string(),
            status: BookingStatus::Confirmed,
            metadata: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_render_confirmation() {
        let text = render_confirmation("Cabin by the Lake", &confirmed_booking());
        assert!(text.starts_with("Hi Grace Hopper,"));
        assert!(text.contains("Your stay at Cabin by the Lake is confirmed."));
        assert!(text.contains("Check-in:  2025-09-10"));
        assert!(text.contains("Nights:    3"));
        assert!(text.contains("Guests:    3"));
        assert!(text.contains("Total:     $2907.00"));
        assert!(text.contains("Booking reference: bk-7"));
    }

    #[tokio::test]
    async fn test_log_and_disabled_notifiers() {
        let booking = confirmed_booking();
        assert!(LogNotifier::new("Haven").send_confirmation(&booking).await);
        assert!(!DisabledNotifier.send_confirmation(&booking).await);
    }

    #[test]
    fn test_from_config_selects_kind() {
        let mut config = ApiConfig::default();
        assert!(format!("{:?}", from_config(&config)).contains("LogNotifier"));

        config.notifier = "disabled".to_string();
        assert!(format!("{:?}", from_config(&config)).contains("DisabledNotifier"));
    }
}
