//! API route configuration.
//!
//! None of these routes require authentication.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Shorten, health and redirect routes.
///
/// # Endpoints
///
/// - `POST /shorten`  - Create a short URL
/// - `GET  /health`   - Store health check
/// - `GET  /{code}`   - Redirect to the stored URL
///
/// Static segments take precedence over `/{code}`, which is why generated codes
/// never spell `health`, `shorten` or `static`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}
