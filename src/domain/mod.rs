//! Domain layer containing the short link model and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - [`entities::ShortCode`] and [`entities::UrlMapping`]
//! - [`repositories`] - The key-value store trait implemented by infrastructure
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Short code generation lives in [`crate::utils::code_generator`].

pub mod entities;
pub mod repositories;
