//! `Location` header construction for redirects.
//!
//! Stored URLs are never validated, so they may hold spaces, control characters
//! or non-ASCII text. Those bytes are percent-encoded before the value goes into
//! the header; ASCII URL delimiters and existing `%XX` escapes pass through
//! untouched, so an already well-formed URL is sent back byte-for-byte.

use crate::error::AppError;
use axum::http::HeaderValue;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::json;

/// Bytes left as-is: unreserved marks plus the URL delimiters
/// `:/%#?=@[]!$&'()*+,;`.
const LOCATION_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b':')
    .remove(b'/')
    .remove(b'%')
    .remove(b'#')
    .remove(b'?')
    .remove(b'=')
    .remove(b'@')
    .remove(b'[')
    .remove(b']')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';');

/// Percent-encodes everything in `url` that is not a URL delimiter or unreserved character.
pub fn encode_location(url: &str) -> String {
    utf8_percent_encode(url, LOCATION_ENCODE_SET).to_string()
}

/// Builds the `Location` header value for a stored URL.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the encoded value still is not a valid
/// header value. A redirect is never sent without its target.
pub fn location_header(url: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(&encode_location(url)).map_err(|e| {
        AppError::internal(
            "Stored URL cannot be used as a redirect target",
            json!({ "reason": e.to_string() }),
        )
    })
}
