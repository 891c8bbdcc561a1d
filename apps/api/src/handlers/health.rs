//! Health check endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub bookings: usize,
    pub contacts: usize,
    pub version: &'static str,
}

/// `GET /health`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        bookings: state.store.bookings().len().await,
        contacts: state.store.contacts().len().await,
        version: env!("CARGO_PKG_VERSION"),
    })
}
