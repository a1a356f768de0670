//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use serde_json::json;
use tracing::debug;

/// Service for creating and resolving short links.
///
/// Holds the injected store client for the lifetime of the service. It keeps
/// no other state, so concurrent requests never coordinate with each other.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    code_length: usize,
}

impl LinkService {
    /// Creates a new link service generating codes of `code_length` characters.
    pub fn new(repository: Arc<dyn LinkRepository>, code_length: usize) -> Self {
        Self {
            repository,
            code_length,
        }
    }

    /// Stores `long_url` under a freshly generated short code.
    ///
    /// The URL is stored as submitted: no syntax, scheme or reachability checks.
    /// No collision check is made either; if the generated code already exists
    /// the previous mapping is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if `long_url` is empty (nothing is written).
    /// Returns [`AppError::StoreUnavailable`] if the write fails.
    pub async fn shorten(&self, long_url: String) -> Result<UrlMapping, AppError> {
        if long_url.is_empty() {
            return Err(AppError::invalid_input(
                "URL cannot be empty",
                json!({ "field": "long_url" }),
            ));
        }

        let mapping = UrlMapping::new(generate_code(self.code_length), long_url);

        self.repository.save(&mapping).await?;

        debug!("Shortened {} -> {}", mapping.code, mapping.long_url);

        Ok(mapping)
    }

    /// Resolves a short code to its stored URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown or maps to an empty value.
    /// Returns [`AppError::StoreUnavailable`] if the read fails.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        match self.repository.find_by_code(code).await? {
            Some(long_url) if !long_url.is_empty() => Ok(long_url),
            _ => Err(AppError::not_found("URL not found", json!({ "code": code }))),
        }
    }

    /// Removes a mapping. Used by the admin CLI only.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the delete fails.
    pub async fn delete(&self, code: &str) -> Result<bool, AppError> {
        self.repository.delete(code).await
    }

    /// Returns whether the backing store answers.
    pub async fn is_store_healthy(&self) -> bool {
        self.repository.health_check().await
    }
}
