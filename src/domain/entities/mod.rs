//! Core domain entities.
//!
//! - [`ShortCode`] - The compact identifier used in short links
//! - [`UrlMapping`] - A short code paired with the URL it points to
//!
//! Mappings carry no metadata: no creation time, owner, expiry or click count.

pub mod link;

pub use link::{ShortCode, UrlMapping};
