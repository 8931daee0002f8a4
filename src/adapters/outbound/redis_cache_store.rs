//! Redis Cache Store
//!
//! Implements CacheStore using a Redis server shared between processes.

use crate::domain::ports::{CacheConnection, CacheError, CacheStore};
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use std::time::Duration;

/// Redis-backed cache store.
///
/// Every `connect()` opens a fresh connection that is closed when
/// the returned handle is dropped.
pub struct RedisCacheStore {
    client: redis::Client,
}

impl RedisCacheStore {
    /// Create a store for a connection URL (e.g., "redis://localhost:6379").
    ///
    /// Only parses the URL; no connection is made until `connect()`.
    pub fn open(url: &str) -> Result<Self, CacheError> {
        let client =
            redis::Client::open(url).map_err(|e| CacheError::Connection(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn connect(&self) -> Result<Box<dyn CacheConnection>, CacheError> {
        let conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::Connection(e.to_string()))?;
        Ok(Box::new(RedisConnection { conn }))
    }
}

struct RedisConnection {
    conn: MultiplexedConnection,
}

#[async_trait]
impl CacheConnection for RedisConnection {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.conn.clone();
        redis::cmd("GET")
            .arg(key)
            .query_async::<_, Option<String>>(&mut conn)
            .await
            .map_err(|e| CacheError::Command(e.to_string()))
    }

    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        // Redis rejects EX 0
        let secs = ttl.as_secs().max(1);
        let mut conn = self.conn.clone();
        redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EX")
            .arg(secs)
            .query_async::<_, ()>(&mut conn)
            .await
            .map_err(|e| CacheError::Command(e.to_string()))
    }
}
