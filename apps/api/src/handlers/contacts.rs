//! Contact-form handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use haven_core::validation::validate_contact_request;
use haven_core::{Contact, ContactRequest};

use crate::error::ApiResult;
use crate::AppState;

/// `GET /api/contacts` - newest first.
pub async fn list_contacts(State(state): State<Arc<AppState>>) -> Json<Vec<Contact>> {
    Json(state.store.contacts().list().await)
}

/// `POST /api/contacts`
pub async fn create_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Contact>)> {
    let Json(request) = payload?;
    let new_contact = validate_contact_request(&request)?;
    let contact = state.store.contacts().create(new_contact).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}
