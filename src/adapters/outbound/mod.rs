mod api_ninjas_bin_provider;
mod dashmap_cache_store;
mod redis_cache_store;

pub use api_ninjas_bin_provider::{ApiNinjasBinProvider, BinApiConfig};
pub use dashmap_cache_store::DashMapCacheStore;
pub use redis_cache_store::RedisCacheStore;
