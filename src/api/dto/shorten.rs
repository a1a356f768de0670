//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// A missing `long_url` deserializes to an empty string so it fails the same
/// validation as an explicit `""`.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten. Only emptiness is checked.
    #[serde(default)]
    #[validate(length(min = 1, message = "URL cannot be empty"))]
    pub long_url: String,
}

/// Relative path of the created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
