//! Cache Store Port
//!
//! Defines the interface for the shared key-value cache holding
//! resolved BIN countries. Implementations may use Redis or in-memory storage.

use async_trait::async_trait;
use std::time::Duration;

/// Errors raised by a cache store.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CacheError {
    #[error("cache connection failed: {0}")]
    Connection(String),
    #[error("cache command failed: {0}")]
    Command(String),
}

/// Factory for scoped cache connections.
///
/// Each lookup acquires its own connection. The connection is released
/// when the returned box is dropped.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Open a connection to the store.
    async fn connect(&self) -> Result<Box<dyn CacheConnection>, CacheError>;
}

/// An open connection to the cache store.
#[async_trait]
pub trait CacheConnection: Send + Sync {
    /// Get the text value for a key, or None if absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Set a value that expires after `ttl`.
    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;
}
