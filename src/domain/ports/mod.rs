mod bin_info_provider;
mod cache_store;

pub use bin_info_provider::BinInfoProvider;
pub use cache_store::{CacheConnection, CacheError, CacheStore};
