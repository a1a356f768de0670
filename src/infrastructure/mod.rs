//! Infrastructure layer for external integrations.
//!
//! Provides concrete implementations of the store trait defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Redis and in-memory key-value stores

pub mod persistence;
