//! # haven-api: REST Server for Haven
//!
//! axum application serving the reservation form and the owner's admin
//! screens.
//!
//! ## Request Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Request Pipeline                               │
//! │                                                                         │
//! │  HTTP request                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CorsLayer ──► TraceLayer (one span per request)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Router ──► handler(State<Arc<AppState>>, extractors)                  │
//! │                  │                                                      │
//! │                  ├── haven_core::validation                            │
//! │                  ├── state.store (haven-store)                         │
//! │                  └── state.notifier                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Json<T>  or  ApiError ──► { code, message, fields? }                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Routes
//!
//! | Method | Path                  | Handler                               |
//! |--------|-----------------------|---------------------------------------|
//! | GET    | `/health`             | [`handlers::health::health`]          |
//! | GET    | `/api/bookings`       | [`handlers::bookings::list_bookings`] |
//! | POST   | `/api/bookings`       | [`handlers::bookings::create_booking`]|
//! | GET    | `/api/bookings/{id}`  | [`handlers::bookings::get_booking`]   |
//! | PATCH  | `/api/bookings/{id}`  | [`handlers::bookings::update_status`] |
//! | GET    | `/api/contacts`       | [`handlers::contacts::list_contacts`] |
//! | POST   | `/api/contacts`       | [`handlers::contacts::create_contact`]|
//! | GET    | `/api/pricing/quote`  | [`handlers::pricing::get_quote`]      |
//! | POST   | `/api/payments`       | [`handlers::payments::capture`]       |

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod handlers;
pub mod notifier;
pub mod payments;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use haven_store::{Clock, Store, SystemClock};

use crate::config::ApiConfig;
use crate::notifier::Notifier;
use crate::payments::MockPaymentGateway;

pub use crate::error::{ApiError, ApiResult, ErrorCode};

/// Shared application state, built once in `main`.
#[derive(Debug)]
pub struct AppState {
    pub store: Store,
    pub notifier: Arc<dyn Notifier>,
    pub payments: MockPaymentGateway,
    /// Source of "today" for card expiry checks.
    pub clock: Arc<dyn Clock>,
    pub config: ApiConfig,
}

impl AppState {
    /// Production wiring: empty in-memory store, configured notifier,
    /// wall clock.
    pub fn from_config(config: ApiConfig) -> Self {
        AppState {
            store: Store::in_memory(),
            notifier: notifier::from_config(&config),
            payments: MockPaymentGateway::new(),
            clock: Arc::new(SystemClock),
            config,
        }
    }

    /// Explicit wiring, used by tests.
    pub fn new(
        config: ApiConfig,
        store: Store,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        AppState {
            store,
            notifier,
            payments: MockPaymentGateway::new(),
            clock,
            config,
        }
    }
}

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    use crate::handlers::{bookings, contacts, health, payments, pricing};

    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route(
            "/api/bookings/{id}",
            get(bookings::get_booking).patch(bookings::update_status),
        )
        .route(
            "/api/contacts",
            get(contacts::list_contacts).post(contacts::create_contact),
        )
        .route("/api/pricing/quote", get(pricing::get_quote))
        .route("/api/payments", post(payments::capture))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
