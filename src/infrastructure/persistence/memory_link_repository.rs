//! In-memory implementation of the link repository.

use std::collections::HashMap;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// A store that keeps mappings in a process-local map.
///
/// Selected with `STORE_BACKEND=memory`. Mappings are lost on restart and are
/// not shared between processes, so this is meant for local development and
/// for exercising the HTTP layer in tests.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a raw entry, bypassing code generation.
    pub async fn insert(&self, code: impl Into<String>, long_url: impl Into<String>) {
        self.entries
            .write()
            .await
            .insert(code.into(), long_url.into());
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn save(&self, mapping: &UrlMapping) -> Result<(), AppError> {
        self.insert(mapping.code.as_str(), mapping.long_url.as_str())
            .await;
        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.read().await.get(code).cloned())
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.entries.write().await.remove(code).is_some())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ShortCode;

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryLinkRepository::new();
        let mapping = UrlMapping::new(ShortCode::new("aB3xQ9"), "https://example.com");

        repo.save(&mapping).await.unwrap();

        let found = repo.find_by_code("aB3xQ9").await.unwrap();
        assert_eq!(found.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn test_find_missing() {
        let repo = InMemoryLinkRepository::new();

        assert_eq!(repo.find_by_code("zzzzzz").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_code() {
        let repo = InMemoryLinkRepository::new();
        let code = ShortCode::new("aB3xQ9");

        repo.save(&UrlMapping::new(code.clone(), "https://first.example"))
            .await
            .unwrap();
        repo.save(&UrlMapping::new(code, "https://second.example"))
            .await
            .unwrap();

        assert_eq!(repo.len().await, 1);
        assert_eq!(
            repo.find_by_code("aB3xQ9").await.unwrap().as_deref(),
            Some("https://second.example")
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryLinkRepository::new();
        repo.insert("abc123", "https://example.com").await;

        assert!(repo.delete("abc123").await.unwrap());
        assert!(!repo.delete("abc123").await.unwrap());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_new_starts_empty() {
        let repo = InMemoryLinkRepository::new();

        assert!(repo.is_empty().await);
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_health_check() {
        assert!(InMemoryLinkRepository::new().health_check().await);
    }
}
