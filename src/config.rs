//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Store Connection
//!
//! ### Method 1: Full URL
//!
//! ```bash
//! export STORE_URL="redis://localhost:6379/0"
//! ```
//!
//! ### Method 2: Individual components
//!
//! ```bash
//! export STORE_HOST="redis"
//! export STORE_PORT="6379"
//! export STORE_PASSWORD=""
//! export STORE_DB="0"
//! ```
//!
//! If `STORE_URL` is not set it is built from the components; every component
//! has a default, so with no variables at all the service talks to
//! `redis://redis:6379/0`.
//!
//! ## Optional Variables
//!
//! - `STORE_BACKEND` - `redis` or `memory` (default: `redis`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `CODE_LENGTH` - Generated short code length (default: 6, range: 4-32)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;

use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH, MIN_CODE_LENGTH};

/// Which key-value store backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Redis,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "redis" => Ok(Self::Redis),
            "memory" => Ok(Self::Memory),
            other => anyhow::bail!("STORE_BACKEND must be 'redis' or 'memory', got '{}'", other),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Redis => f.write_str("redis"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub store_url: String,
    pub store_backend: StoreBackend,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Number of characters in generated short codes.
    pub code_length: usize,
    /// Directory mounted at `/static`.
    pub static_dir: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable or `STORE_BACKEND` cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let store_url = Self::load_store_url();

        let store_backend: StoreBackend = env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "redis".to_string())
            .parse()?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let code_length = match env::var("CODE_LENGTH") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("CODE_LENGTH must be a number, got '{}'", v))?,
            Err(_) => DEFAULT_CODE_LENGTH,
        };

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        Ok(Self {
            store_url,
            store_backend,
            listen_addr,
            log_level,
            log_format,
            code_length,
            static_dir,
        })
    }

    /// Loads the store URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `STORE_URL` environment variable
    /// 2. Constructed from `STORE_HOST` (default `redis`), `STORE_PORT` (default `6379`),
    ///    `STORE_PASSWORD` and `STORE_DB` (default `0`)
    fn load_store_url() -> String {
        if let Ok(url) = env::var("STORE_URL") {
            return url;
        }

        let host = env::var("STORE_HOST").unwrap_or_else(|_| "redis".to_string());
        let port = env::var("STORE_PORT").unwrap_or_else(|_| "6379".to_string());
        let password = env::var("STORE_PASSWORD").ok();
        let db = env::var("STORE_DB").unwrap_or_else(|_| "0".to_string());

        match password {
            // Empty password means no authentication
            Some(pwd) if !pwd.is_empty() => format!("redis://:{}@{}:{}/{}", pwd, host, port, db),
            _ => format!("redis://{}:{}/{}", host, port, db),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `code_length` is outside 4-32
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `store_url` is not a `redis://` / `rediss://` URL (Redis backend only)
    pub fn validate(&self) -> Result<()> {
        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&self.code_length) {
            anyhow::bail!(
                "CODE_LENGTH must be between {} and {}, got {}",
                MIN_CODE_LENGTH,
                MAX_CODE_LENGTH,
                self.code_length
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.store_backend == StoreBackend::Redis
            && !self.store_url.starts_with("redis://")
            && !self.store_url.starts_with("rediss://")
        {
            anyhow::bail!(
                "STORE_URL must start with 'redis://' or 'rediss://', got '{}'",
                mask_connection_string(&self.store_url)
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        match self.store_backend {
            StoreBackend::Redis => tracing::info!(
                "  Store: redis ({})",
                mask_connection_string(&self.store_url)
            ),
            StoreBackend::Memory => tracing::info!("  Store: memory (not persistent)"),
        }

        tracing::info!("  Code length: {}", self.code_length);
        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks the password in a connection string for logging.
///
/// `redis://:password@host:port/db` → `redis://:***@host:port/db`
fn mask_connection_string(url: &str) -> String {
    if let Some(start) = url.find("://") {
        let rest = &url[start + 3..];

        if let Some(at_pos) = rest.find('@') {
            let credentials = &rest[..at_pos];
            let host_part = &rest[at_pos..];

            if let Some(colon_pos) = credentials.rfind(':') {
                let username = &credentials[..colon_pos];
                return format!("{}://{}:***{}", &url[..start], username, host_part);
            }
        }
    }

    url.to_string()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
