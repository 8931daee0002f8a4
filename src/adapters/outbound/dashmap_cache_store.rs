//! DashMap Cache Store
//!
//! Implements CacheStore using DashMap for lock-free concurrent access
//! within a single process.

use crate::domain::ports::{CacheConnection, CacheError, CacheStore};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    expires_at: Instant,
}

/// In-process TTL cache store.
///
/// Expired entries are never returned. They are removed lazily on read
/// and by the optional background garbage collection task.
pub struct DashMapCacheStore {
    entries: Arc<DashMap<String, CacheEntry>>,
}

impl DashMapCacheStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
        }
    }

    /// Start the background garbage collection task.
    pub fn start_gc(&self, interval: Duration) {
        let entries = self.entries.clone();

        tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;

                let removed = Self::purge(&entries);
                if removed > 0 {
                    tracing::debug!("cache GC removed {} expired entries", removed);
                }
            }
        });
    }

    /// Remove all expired entries, returning how many were dropped.
    pub fn cleanup_expired(&self) -> usize {
        Self::purge(&self.entries)
    }

    /// Number of stored entries, including expired ones not yet reaped.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn purge(entries: &DashMap<String, CacheEntry>) -> usize {
        let now = Instant::now();
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        before.saturating_sub(entries.len())
    }
}

impl Default for DashMapCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for DashMapCacheStore {
    async fn connect(&self) -> Result<Box<dyn CacheConnection>, CacheError> {
        Ok(Box::new(DashMapConnection {
            entries: self.entries.clone(),
        }))
    }
}

struct DashMapConnection {
    entries: Arc<DashMap<String, CacheEntry>>,
}

#[async_trait]
impl CacheConnection for DashMapConnection {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let now = Instant::now();
        let expired = match self.entries.get(key) {
            Some(entry) if entry.expires_at > now => return Ok(Some(entry.value.clone())),
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove_if(key, |_, entry| entry.expires_at <= now);
        }
        Ok(None)
    }

    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value: value.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Set and Get Tests =====

    #[tokio::test]
    async fn test_set_and_get() {
        let store = DashMapCacheStore::new();
        let conn = store.connect().await.unwrap();

        conn.set_ex("bin_country:411111", "US", Duration::from_secs(60))
            .await
            .unwrap();

        let result = conn.get("bin_country:411111").await.unwrap();
        assert_eq!(result, Some("US".to_string()));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let store = DashMapCacheStore::new();
        let conn = store.connect().await.unwrap();

        assert_eq!(conn.get("bin_country:000000").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = DashMapCacheStore::new();
        let conn = store.connect().await.unwrap();

        conn.set_ex("k", "DE", Duration::from_secs(60)).await.unwrap();
        conn.set_ex("k", "FR", Duration::from_secs(60)).await.unwrap();

        assert_eq!(conn.get("k").await.unwrap(), Some("FR".to_string()));
    }

    #[tokio::test]
    async fn test_connections_share_entries() {
        let store = DashMapCacheStore::new();

        {
            let writer = store.connect().await.unwrap();
            writer.set_ex("k", "RS", Duration::from_secs(60)).await.unwrap();
        }

        let reader = store.connect().await.unwrap();
        assert_eq!(reader.get("k").await.unwrap(), Some("RS".to_string()));
    }

    // ===== Expiry Tests =====

    #[tokio::test]
    async fn test_expired_entry_is_invisible_and_removed() {
        let store = DashMapCacheStore::new();
        let conn = store.connect().await.unwrap();

        conn.set_ex("k", "DE", Duration::from_millis(20)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(40)).await;

        assert_eq!(conn.get("k").await.unwrap(), None);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_cleanup_expired_mixed() {
        let store = DashMapCacheStore::new();
        let conn = store.connect().await.unwrap();

        conn.set_ex("old", "DE", Duration::from_millis(10)).await.unwrap();
        conn.set_ex("fresh", "FR", Duration::from_secs(60)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;

        assert_eq!(store.cleanup_expired(), 1);
        assert_eq!(store.len(), 1);
        assert_eq!(conn.get("fresh").await.unwrap(), Some("FR".to_string()));
    }

    #[tokio::test]
    async fn test_start_gc_removes_expired_entries() {
        let store = DashMapCacheStore::new();
        let conn = store.connect().await.unwrap();

        conn.set_ex("old", "DE", Duration::from_millis(10)).await.unwrap();
        conn.set_ex("fresh", "FR", Duration::from_secs(10)).await.unwrap();

        store.start_gc(Duration::from_millis(30));
        tokio::time::sleep(Duration::from_millis(80)).await;

        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_default() {
        let store = DashMapCacheStore::default();
        assert!(store.is_empty());
    }
}
