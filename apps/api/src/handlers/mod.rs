//! # HTTP Handlers
//!
//! One module per resource. Handlers stay thin:
//!
//! ```text
//! extract ──► validate (haven-core) ──► store (haven-store) ──► Json
//! ```
//!
//! Every handler returns `ApiResult<T>`; errors render through
//! [`ApiError`](crate::error::ApiError).

pub mod bookings;
pub mod contacts;
pub mod health;
pub mod payments;
pub mod pricing;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found("Route", uri.path())
}
