//! bin-region - BIN country lookup and region classification
//!
//! This is the composition root that wires together all the components.

use bin_region::adapters::inbound::ApiServer;
use bin_region::adapters::outbound::{
    ApiNinjasBinProvider, BinApiConfig, DashMapCacheStore, RedisCacheStore,
};
use bin_region::application::LookupService;
use bin_region::config::{load_config, CacheBackend};
use bin_region::domain::ports::CacheStore;
use std::sync::Arc;
use std::time::Duration;

const USAGE: &str = "usage: bin-region serve | bin-region <BIN>...";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    if !cfg.has_api_key() {
        tracing::warn!("BINREGION_API_KEY is not set; BIN service requests will be rejected");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        anyhow::bail!(USAGE);
    }

    // ===== COMPOSITION ROOT =====

    let cache: Arc<dyn CacheStore> = match cfg.cache_backend {
        CacheBackend::Redis => {
            tracing::info!("using redis cache at {}", cfg.redis_url);
            Arc::new(RedisCacheStore::open(&cfg.redis_url)?)
        }
        CacheBackend::Memory => {
            tracing::info!("using in-memory cache");
            let store = DashMapCacheStore::new();
            store.start_gc(Duration::from_secs(cfg.cache_gc_interval_secs));
            Arc::new(store)
        }
    };

    let provider = Arc::new(ApiNinjasBinProvider::new(BinApiConfig {
        base_url: cfg.api_url.clone(),
        api_key: cfg.api_key.clone(),
        timeout: Duration::from_secs(cfg.request_timeout_secs),
    })?);

    let service = Arc::new(LookupService::new(
        cache,
        provider,
        Duration::from_secs(cfg.cache_ttl_secs),
    ));

    if args[0] == "serve" {
        let server = ApiServer::new(cfg.listen_addr.clone(), service);
        return server.run().await;
    }

    for bin in &args {
        let record = service.lookup_and_classify(bin).await?;
        println!("{}", serde_json::to_string(&record)?);
    }

    Ok(())
}
