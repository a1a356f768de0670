//! Redis implementation of the link repository.

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use serde_json::json;
use tracing::{debug, info, warn};

/// Redis-backed store for short code mappings.
///
/// Keys are the bare short code in the database selected by the connection URL,
/// values are the long URL, and no TTL is set. The `ConnectionManager` is a
/// multiplexed connection that is cloned per call and reconnects on its own after
/// a failure, so one failed command only fails the request that issued it.
pub struct RedisLinkRepository {
    client: ConnectionManager,
}

impl RedisLinkRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://redis:6379/0"`)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> Result<Self, AppError> {
        let client = Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }
}

/// Decodes a raw `GET` reply as UTF-8 text.
///
/// A value that is not valid UTF-8 was written by something other than this
/// service; it is reported as [`AppError::Internal`], not as a store outage.
fn decode_value(code: &str, raw: Option<Vec<u8>>) -> Result<Option<String>, AppError> {
    raw.map(|bytes| {
        String::from_utf8(bytes).map_err(|e| {
            warn!("Value under {} is not valid UTF-8", code);
            AppError::internal(
                "Stored value is not valid UTF-8 text",
                json!({ "code": code, "valid_up_to": e.utf8_error().valid_up_to() }),
            )
        })
    })
    .transpose()
}

#[async_trait]
impl LinkRepository for RedisLinkRepository {
    async fn save(&self, mapping: &UrlMapping) -> Result<(), AppError> {
        let mut conn = self.client.clone();

        conn.set::<_, _, ()>(mapping.code.as_str(), &mapping.long_url)
            .await?;

        debug!("SET {} -> {}", mapping.code, mapping.long_url);
        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<String>, AppError> {
        let mut conn = self.client.clone();

        let raw = conn.get::<_, Option<Vec<u8>>>(code).await?;
        let value = decode_value(code, raw)?;

        match &value {
            Some(url) => debug!("GET {} -> {}", code, url),
            None => debug!("GET {} -> (nil)", code),
        }

        Ok(value)
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let mut conn = self.client.clone();

        let deleted = conn.del::<_, i32>(code).await?;

        Ok(deleted > 0)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_value_absent() {
        assert_eq!(decode_value("abc123", None).unwrap(), None);
    }

    #[test]
    fn test_decode_value_utf8() {
        let raw = Some("https://example.com/ü".as_bytes().to_vec());

        assert_eq!(
            decode_value("abc123", raw).unwrap().as_deref(),
            Some("https://example.com/ü")
        );
    }

    #[test]
    fn test_decode_value_invalid_utf8_is_internal() {
        let err = decode_value("abc123", Some(vec![b'h', 0xff, 0xfe])).unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
        assert_eq!(err.to_error_info().code, "internal_error");
        assert_eq!(err.to_error_info().details["valid_up_to"], 1);
    }
}
