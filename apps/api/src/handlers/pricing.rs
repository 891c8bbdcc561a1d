//! Price quote endpoint.
//!
//! Lets the reservation form show the same breakdown the server would
//! compute when a booking arrives without a total.

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::Json;
use serde::Deserialize;

use haven_core::pricing;
use haven_core::PriceBreakdown;

use crate::error::ApiResult;

/// Query of `GET /api/pricing/quote`.
#[derive(Debug, Default, Deserialize)]
pub struct QuoteParams {
    pub checkin: Option<String>,
    pub checkout: Option<String>,
    pub guests: Option<u32>,
}

/// `GET /api/pricing/quote?checkin=2025-07-01&checkout=2025-07-04&guests=2`
///
/// Invalid or missing dates give an all-zero breakdown, not an error.
pub async fn get_quote(
    params: Result<Query<QuoteParams>, QueryRejection>,
) -> ApiResult<Json<PriceBreakdown>> {
    let Query(params) = params?;
    Ok(Json(pricing::quote(
        params.checkin.as_deref(),
        params.checkout.as_deref(),
        params.guests.unwrap_or(1),
    )))
}
