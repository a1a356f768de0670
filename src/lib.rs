//! # KV Shortener
//!
//! A small URL shortening service built with Axum and backed by a Redis key-value store.
//!
//! ## Architecture
//!
//! The crate keeps the same layer separation as a larger service would, even though
//! each layer is thin:
//!
//! - **Domain Layer** ([`domain`]) - Short code / mapping entities and the store trait
//! - **Application Layer** ([`application`]) - Shorten and resolve logic
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - JSON endpoints, redirect handler, middleware
//! - **Web Layer** ([`web`]) - HTML landing page
//!
//! ## Behaviour
//!
//! - `POST /shorten` stores a random 6-character `[A-Za-z0-9]` code mapped to the
//!   submitted URL and returns `{"short_url": "/<code>"}`
//! - `GET /{code}` answers `302 Found` pointing at the stored URL, or 404
//! - Codes are never checked against existing keys: a collision overwrites
//!
//! ## Quick Start
//!
//! ```bash
//! export STORE_HOST="localhost"
//! export STORE_PORT="6379"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod telemetry;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{ShortCode, UrlMapping};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
