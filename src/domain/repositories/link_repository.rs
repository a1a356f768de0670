//! Repository trait for short code storage.

use crate::domain::entities::UrlMapping;
use crate::error::AppError;
use async_trait::async_trait;

/// String-keyed store holding `short code -> long URL` entries.
///
/// Implementations are shared across request handlers and must be thread-safe.
/// Failures surface as [`AppError::StoreUnavailable`] and are never retried here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores the mapping unconditionally.
    ///
    /// An existing entry under the same code is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    async fn save(&self, mapping: &UrlMapping) -> Result<(), AppError>;

    /// Looks up the URL stored under `code`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the key exists (the value may be empty)
    /// - `Ok(None)` if the key is absent
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    /// Returns [`AppError::Internal`] if the stored value is not UTF-8 text.
    async fn find_by_code(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Removes the entry under `code`.
    ///
    /// Returns `Ok(true)` if an entry was removed, `Ok(false)` if none existed.
    /// Only the admin CLI deletes; the HTTP service never does.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Checks if the store answers.
    async fn health_check(&self) -> bool;
}
