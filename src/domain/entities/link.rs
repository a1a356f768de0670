//! Short code and URL mapping entities.

use std::fmt;

/// Identifier that replaces a long URL in a shareable link.
///
/// Generated codes are drawn from `[A-Za-z0-9]`; codes taken from a request
/// path are kept verbatim and never checked against that alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(String);

impl ShortCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Relative path of the short link, e.g. `/aB3xQ9`.
    pub fn path(&self) -> String {
        format!("/{}", self.0)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A short code and the URL it redirects to.
///
/// Stored as a flat `code -> long_url` string entry. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub code: ShortCode,
    pub long_url: String,
}

impl UrlMapping {
    pub fn new(code: ShortCode, long_url: impl Into<String>) -> Self {
        Self {
            code,
            long_url: long_url.into(),
        }
    }

    /// Relative short URL returned to clients.
    pub fn short_path(&self) -> String {
        self.code.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_code_path() {
        let code = ShortCode::new("aB3xQ9");
        assert_eq!(code.path(), "/aB3xQ9");
        assert_eq!(code.to_string(), "aB3xQ9");
        assert_eq!(code.as_str(), "aB3xQ9");
    }

    #[test]
    fn test_mapping_short_path() {
        let mapping = UrlMapping::new(ShortCode::new("zzzzzz"), "https://example.com");

        assert_eq!(mapping.short_path(), "/zzzzzz");
        assert_eq!(mapping.long_url, "https://example.com");
    }

    #[test]
    fn test_short_code_into_inner() {
        let code = ShortCode::new("abc123");
        assert_eq!(code.into_inner(), "abc123".to_string());
    }
}
