//! BIN Resolver
//!
//! Cache-first resolution of a card number's issuing country.

use crate::application::LookupError;
use crate::domain::entities::BinKey;
use crate::domain::ports::{BinInfoProvider, CacheConnection};
use crate::domain::value_objects::Resolution;
use std::sync::Arc;
use std::time::Duration;

/// How long a resolved country stays cached (30 days).
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Resolves a card number or BIN to its issuing country.
///
/// 1. Reads the cache; a hit returns without touching the network
/// 2. On a miss, makes a single request to the BIN provider
/// 3. Writes only a resolved country back to the cache
pub struct BinResolver {
    provider: Arc<dyn BinInfoProvider>,
    cache_ttl: Duration,
}

impl BinResolver {
    pub fn new(provider: Arc<dyn BinInfoProvider>, cache_ttl: Duration) -> Self {
        Self {
            provider,
            cache_ttl,
        }
    }

    /// Resolve the issuing country for `number` using an open cache connection.
    ///
    /// Only the first six characters of `number` are used. Returns an
    /// error only if the cache read fails.
    pub async fn resolve(
        &self,
        number: &str,
        cache: &dyn CacheConnection,
    ) -> Result<Resolution, LookupError> {
        let bin = BinKey::from_number(number);
        let cache_key = bin.cache_key();

        if let Some(cached) = cache.get(&cache_key).await?.filter(|c| !c.is_empty()) {
            tracing::debug!("cache hit for bin {} -> {}", bin, cached);
            return Ok(Resolution::Country(cached));
        }
        tracing::debug!("cache miss for bin {}", bin);

        let resolution = self.provider.lookup(&bin).await;

        if let Resolution::Country(code) = &resolution {
            match cache.set_ex(&cache_key, code, self.cache_ttl).await {
                Ok(()) => tracing::info!("cached bin {} -> {}", bin, code),
                Err(e) => tracing::warn!("failed to cache bin {}: {}", bin, e),
            }
        }

        Ok(resolution)
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }
}
