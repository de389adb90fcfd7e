//! Redis-backed cache store.
//!
//! One Redis string key per lookup term; expiry is enforced by the store
//! itself via `SET ... EX`, so an expired entry simply reads back as
//! absent. Uses a multiplexed async connection for connection reuse.

use std::time::Duration;

use async_trait::async_trait;
use redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use tracing::debug;

use unidata_core::error::{Result, UnidataError};
use unidata_core::traits::CacheStore;

/// Cache store backed by a Redis server.
#[derive(Clone)]
pub struct RedisStore {
    client: Client,
}

impl RedisStore {
    /// Creates a store from a Redis connection URL.
    ///
    /// The URL is validated here; the connection itself is established
    /// lazily on first use.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let store = RedisStore::new("redis://127.0.0.1:6379")?;
    /// ```
    pub fn new(url: &str) -> Result<Self> {
        let client = Client::open(url)
            .map_err(|e| UnidataError::Config(format!("invalid Redis URL '{}': {}", url, e)))?;
        Ok(Self { client })
    }

    /// Creates a store from a host and port.
    pub fn with_host_port(host: &str, port: u16) -> Result<Self> {
        Self::new(&format!("redis://{}:{}", host, port))
    }

    async fn connection(&self) -> Result<MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| UnidataError::Store(format!("failed to connect to Redis: {}", e)))
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;

        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| UnidataError::Store(format!("Redis GET failed: {}", e)))
    }

    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let mut conn = self.connection().await?;

        conn.set_ex::<_, _, ()>(key, value, ttl.as_secs())
            .await
            .map_err(|e| UnidataError::Store(format!("Redis SET failed: {}", e)))?;

        debug!(key, ttl_secs = ttl.as_secs(), "Cached entry in Redis");
        Ok(())
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_valid_url() {
        assert!(RedisStore::new("redis://127.0.0.1:6379").is_ok());
        assert!(RedisStore::new("redis://cache.internal:6380/2").is_ok());
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let err = RedisStore::new("not a url").unwrap_err();
        assert!(matches!(err, UnidataError::Config(_)));
    }

    #[test]
    fn test_with_host_port() {
        assert!(RedisStore::with_host_port("localhost", 6379).is_ok());
    }
}
