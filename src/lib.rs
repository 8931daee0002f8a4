//! bin-region Library
//!
//! Resolves the issuing country of a payment card from its BIN and
//! classifies it as EU, RS (Serbia) or OTHER.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use adapters::inbound::ApiServer;
pub use adapters::outbound::{ApiNinjasBinProvider, BinApiConfig, DashMapCacheStore, RedisCacheStore};
pub use application::{BinResolver, LookupError, LookupService, DEFAULT_CACHE_TTL};
pub use config::{load_config, CacheBackend, Config};
pub use domain::entities::{BinKey, LookupRecord};
pub use domain::ports::{BinInfoProvider, CacheConnection, CacheError, CacheStore};
pub use domain::services::CountryClassifier;
pub use domain::value_objects::{Classification, Resolution};
