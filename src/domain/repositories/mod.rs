//! Repository trait definitions for the domain layer.
//!
//! The key-value store is an external collaborator; [`LinkRepository`] is the
//! seam through which the application reaches it.
//!
//! # Implementations
//!
//! - `crate::infrastructure::persistence::RedisLinkRepository` - Redis `GET`/`SET`
//! - `crate::infrastructure::persistence::InMemoryLinkRepository` - process-local map
//! - `MockLinkRepository` - generated by `mockall` under `cfg(test)`

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
