//! Short code generation.
//!
//! Codes are drawn uniformly, with replacement, from the 62 ASCII alphanumerics
//! using `rand`'s thread-local generator (ChaCha, seeded from the OS), so they
//! cannot be predicted by observing earlier codes.

use crate::domain::entities::ShortCode;
use rand::Rng;
use rand::distr::Alphanumeric;

/// Default number of characters in a generated code.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Shortest accepted `CODE_LENGTH`.
pub const MIN_CODE_LENGTH: usize = 4;

/// Longest accepted `CODE_LENGTH`.
pub const MAX_CODE_LENGTH: usize = 32;

/// Single-segment paths served by the router itself.
///
/// A code equal to one of these would be unreachable through `GET /{code}`.
pub const RESERVED_CODES: &[&str] = &["health", "static", "shorten"];

/// Generates a random short code of `length` characters from `[A-Za-z0-9]`.
///
/// The store is not consulted: a code that already exists there is returned
/// as-is and the later write overwrites the earlier mapping. Only codes that
/// spell a reserved route are redrawn.
///
/// # Examples
///
/// ```
/// use kv_shortener::utils::code_generator::generate_code;
///
/// let code = generate_code(6);
/// assert_eq!(code.as_str().len(), 6);
/// assert!(code.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> ShortCode {
    let mut rng = rand::rng();

    loop {
        let code: String = (&mut rng)
            .sample_iter(Alphanumeric)
            .take(length)
            .map(char::from)
            .collect();

        if !is_reserved(&code) {
            return ShortCode::new(code);
        }
    }
}

/// Returns true if `code` collides with a route handled by the service.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}
