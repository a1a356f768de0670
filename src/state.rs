//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// State shared by all request handlers.
///
/// Cloning is cheap: the service and its store client sit behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    /// Wires the link service around an already connected store.
    pub fn new(repository: Arc<dyn LinkRepository>, code_length: usize) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository, code_length)),
        }
    }
}
