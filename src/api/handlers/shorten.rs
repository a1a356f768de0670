//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "/aB3xQ9" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `long_url` is missing or empty, or if the body
/// is not a JSON object. Returns 500 if the store write fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let mapping = state.link_service.shorten(payload.long_url).await?;

    Ok(Json(ShortenResponse {
        short_url: mapping.short_path(),
    }))
}
