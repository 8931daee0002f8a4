//! Lookup Service - Main application use case
//!
//! Orchestrates a BIN lookup: acquires a cache connection, resolves the
//! issuing country, classifies it, and assembles the result record.

use crate::application::{BinResolver, LookupError};
use crate::domain::entities::LookupRecord;
use crate::domain::ports::{BinInfoProvider, CacheStore};
use crate::domain::services::CountryClassifier;
use crate::domain::value_objects::{Classification, Resolution};
use std::sync::Arc;
use std::time::Duration;

/// Lookup service - main application use case.
///
/// Every call opens its own cache connection and drops it before
/// returning, whichever way the call exits.
pub struct LookupService {
    cache: Arc<dyn CacheStore>,
    resolver: BinResolver,
}

impl LookupService {
    /// Create a new lookup service.
    pub fn new(
        cache: Arc<dyn CacheStore>,
        provider: Arc<dyn BinInfoProvider>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            cache,
            resolver: BinResolver::new(provider, cache_ttl),
        }
    }

    /// Resolve the issuing country of a card number or BIN.
    pub async fn resolve(&self, number: &str) -> Result<Resolution, LookupError> {
        let conn = self.cache.connect().await?;
        self.resolver.resolve(number, conn.as_ref()).await
    }

    /// Classify a country code into its region bucket.
    pub fn classify(&self, country_alpha2: Option<&str>) -> Classification {
        CountryClassifier::classify(country_alpha2)
    }

    /// Resolve and classify a BIN.
    ///
    /// `country_alpha2` in the record carries the country code or the
    /// failure marker (`RATE_LIMIT`, `HTTP_<status>`, ...). The classifier
    /// sees that same string, so a marker is `OTHER` and a BIN with no
    /// country is `UNKNOWN`.
    pub async fn lookup_and_classify(&self, bin: &str) -> Result<LookupRecord, LookupError> {
        let resolution = {
            let conn = self.cache.connect().await?;
            self.resolver.resolve(bin, conn.as_ref()).await?
        };

        let country_alpha2 = resolution.as_legacy();
        let classification = CountryClassifier::classify(country_alpha2.as_deref());

        tracing::debug!("bin {} resolved to {} ({})", bin, resolution, classification);

        Ok(LookupRecord::new(
            bin.to_string(),
            country_alpha2,
            classification,
        ))
    }
}
