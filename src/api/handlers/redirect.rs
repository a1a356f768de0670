//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::location::location_header;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The code is taken verbatim from the path and looked up with a single store
/// read. The stored value is not validated as a URL; spaces, control characters
/// and non-ASCII text are percent-encoded so the `Location` header is always
/// present (see [`crate::utils::location`]).
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or maps to an empty value.
/// Returns 500 if the store read fails or the target cannot form a header.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.link_service.resolve(&code).await?;

    debug!("Redirecting {} -> {}", code, long_url);

    let location = location_header(&long_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
