//! # Booking Handlers
//!
//! The booking service: validation, storage and the confirmation
//! notification.
//!
//! ## Create Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /api/bookings                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Json<BookingRequest> ── malformed ──► 400 BAD_REQUEST                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_booking_request ── any field bad ──► 400 VALIDATION_ERROR    │
//! │       │                                       (every field listed)     │
//! │       ▼                                                                 │
//! │  store.bookings().create()                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  status == confirmed? ── yes ──► notifier (failure only logged)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  201 Created + Booking                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{info, warn};

use haven_core::validation::{validate_booking_request, validate_status_update};
use haven_core::{Booking, BookingPatch, BookingRequest, BookingStatus, StatusUpdateRequest};

use crate::error::{ApiError, ApiResult};
use crate::notifier::Notifier;
use crate::AppState;

/// `GET /api/bookings` - newest first.
pub async fn list_bookings(State(state): State<Arc<AppState>>) -> Json<Vec<Booking>> {
    Json(state.store.bookings().list().await)
}

/// `GET /api/bookings/{id}`
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Booking>> {
    state
        .store
        .bookings()
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Booking", &id))
}

/// `POST /api/bookings`
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Booking>)> {
    let Json(request) = payload?;
    let new_booking = validate_booking_request(&request)?;

    let booking = state.store.bookings().create(new_booking).await?;

    if booking.status == BookingStatus::Confirmed {
        notify_confirmed(state.notifier.as_ref(), &booking).await;
    }

    Ok((StatusCode::CREATED, Json(booking)))
}

/// `PATCH /api/bookings/{id}` with `{ "status": "confirmed" }`.
///
/// The body is checked before the id, so a bad status on an unknown
/// booking is a 400.
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<StatusUpdateRequest>, JsonRejection>,
) -> ApiResult<Json<Booking>> {
    let Json(request) = payload?;
    let status = validate_status_update(&request)?;

    let booking = state
        .store
        .bookings()
        .update(&id, BookingPatch::status(status))
        .await
        .ok_or_else(|| ApiError::not_found("Booking", &id))?;

    info!(booking_id = %booking.id, status = %booking.status, "Booking status changed");
    Ok(Json(booking))
}

/// Sends the guest confirmation. Never fails the caller.
async fn notify_confirmed(notifier: &dyn Notifier, booking: &Booking) {
    if notifier.send_confirmation(booking).await {
        info!(booking_id = %booking.id, "Confirmation sent");
    } else {
        warn!(
            booking_id = %booking.id,
            "Confirmation could not be sent; booking is stored"
        );
    }
}
