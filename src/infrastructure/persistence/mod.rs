//! Key-value store implementations of [`crate::domain::repositories::LinkRepository`].
//!
//! # Repositories
//!
//! - [`RedisLinkRepository`] - Production store using Redis `GET`/`SET`
//! - [`InMemoryLinkRepository`] - Process-local map for development and tests

mod memory_link_repository;
mod redis_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
pub use redis_link_repository::RedisLinkRepository;
