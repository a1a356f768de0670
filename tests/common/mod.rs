#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use kv_shortener::AppError;
use kv_shortener::domain::entities::UrlMapping;
use kv_shortener::domain::repositories::LinkRepository;
use kv_shortener::infrastructure::persistence::InMemoryLinkRepository;
use kv_shortener::routes::router;
use kv_shortener::state::AppState;
use kv_shortener::utils::code_generator::DEFAULT_CODE_LENGTH;
use serde_json::json;
use std::sync::Arc;

/// Builds application state over a fresh in-memory store.
///
/// The store handle is returned so tests can seed and inspect entries.
pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::new(repo.clone(), DEFAULT_CODE_LENGTH);

    (state, repo)
}

/// Starts a test server over the full router.
pub fn create_test_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let (state, repo) = create_test_state();
    let server = TestServer::new(router(state, "static")).unwrap();

    (server, repo)
}

/// A store that is never reachable: every command fails and PING is unanswered.
pub struct UnreachableLinkRepository;

impl UnreachableLinkRepository {
    fn error() -> AppError {
        AppError::store_unavailable(
            "Key-value store unavailable",
            json!({ "kind": "IoError" }),
        )
    }
}

#[async_trait]
impl LinkRepository for UnreachableLinkRepository {
    async fn save(&self, _mapping: &UrlMapping) -> Result<(), AppError> {
        Err(Self::error())
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<String>, AppError> {
        Err(Self::error())
    }

    async fn delete(&self, _code: &str) -> Result<bool, AppError> {
        Err(Self::error())
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Starts a test server whose store is down.
pub fn create_unreachable_store_server() -> TestServer {
    let state = AppState::new(Arc::new(UnreachableLinkRepository), DEFAULT_CODE_LENGTH);

    TestServer::new(router(state, "static")).unwrap()
}

/// Strips the leading `/` from a `short_url` path.
pub fn code_from_short_url(short_url: &str) -> &str {
    short_url.strip_prefix('/').unwrap()
}

pub fn is_valid_code(code: &str) -> bool {
    code.len() == DEFAULT_CODE_LENGTH && code.chars().all(|c| c.is_ascii_alphanumeric())
}
