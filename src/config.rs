use serde::Deserialize;

/// Which cache store backs the lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CacheBackend {
    /// Shared Redis server
    Redis,
    /// In-process DashMap store
    Memory,
}

impl CacheBackend {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "mem" => Self::Memory,
            _ => Self::Redis, // fallback
        }
    }
}

#[derive(Deserialize, Clone)]
pub struct Config {
    // BIN service settings
    pub api_url: String,
    pub api_key: String,
    pub request_timeout_secs: u64,

    // Cache settings
    pub cache_backend: CacheBackend,
    pub redis_url: String,
    pub cache_ttl_secs: u64,
    pub cache_gc_interval_secs: u64,

    // Lookup API settings
    pub listen_addr: String,

    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "https://api.api-ninjas.com".to_string(),
            api_key: String::new(),
            request_timeout_secs: 5,
            cache_backend: CacheBackend::Redis,
            redis_url: "redis://localhost:6379".to_string(),
            cache_ttl_secs: 2_592_000,
            cache_gc_interval_secs: 300,
            listen_addr: "0.0.0.0:8080".to_string(),
            debug: false,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("cache_backend", &self.cache_backend)
            .field("redis_url", &self.redis_url)
            .field("cache_ttl_secs", &self.cache_ttl_secs)
            .field("cache_gc_interval_secs", &self.cache_gc_interval_secs)
            .field("listen_addr", &self.listen_addr)
            .field("debug", &self.debug)
            .finish()
    }
}

impl Config {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let api_url = std::env::var("BINREGION_API_URL")
        .unwrap_or_else(|_| "https://api.api-ninjas.com".to_string());

    let api_key = std::env::var("BINREGION_API_KEY").unwrap_or_default();

    let request_timeout_secs = std::env::var("BINREGION_REQUEST_TIMEOUT_SECS")
        .unwrap_or_else(|_| "5".to_string())
        .parse()
        .unwrap_or(5);

    // Cache settings
    let cache_backend = std::env::var("BINREGION_CACHE_BACKEND")
        .map(|v| CacheBackend::from_str(&v))
        .unwrap_or(CacheBackend::Redis);

    let redis_url = std::env::var("BINREGION_REDIS_URL")
        .unwrap_or_else(|_| "redis://localhost:6379".to_string());

    let cache_ttl_secs = std::env::var("BINREGION_CACHE_TTL_SECS")
        .unwrap_or_else(|_| "2592000".to_string())
        .parse()
        .unwrap_or(2_592_000);

    let cache_gc_interval_secs = std::env::var("BINREGION_CACHE_GC_INTERVAL_SECS")
        .unwrap_or_else(|_| "300".to_string())
        .parse()
        .unwrap_or(300);

    let listen_addr = std::env::var("BINREGION_LISTEN_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let debug = std::env::var("DEBUG").is_ok();

    Ok(Config {
        api_url,
        api_key,
        request_timeout_secs,
        cache_backend,
        redis_url,
        cache_ttl_secs,
        cache_gc_interval_secs,
        listen_addr,
        debug,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-wide; each test touches its own.

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.api_url, "https://api.api-ninjas.com");
        assert_eq!(cfg.request_timeout_secs, 5);
        assert_eq!(cfg.cache_ttl_secs, 30 * 24 * 60 * 60);
        assert_eq!(cfg.cache_backend, CacheBackend::Redis);
        assert_eq!(cfg.redis_url, "redis://localhost:6379");
        assert!(!cfg.debug);
    }

    #[test]
    fn test_config_debug_redacts_api_key() {
        let cfg = Config {
            api_key: "secret-key-123".to_string(),
            ..Default::default()
        };
        let debug_str = format!("{:?}", cfg);
        assert!(debug_str.contains("redis_url"));
        assert!(!debug_str.contains("secret-key-123"));
    }

    #[test]
    fn test_has_api_key() {
        assert!(!Config::default().has_api_key());

        let cfg = Config {
            api_key: "abc".to_string(),
            ..Default::default()
        };
        assert!(cfg.has_api_key());
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_load_config_does_not_log() {
        // main calls this before the subscriber is installed.
        let _cfg = load_config().unwrap();
        assert!(!logs_contain("BINREGION_API_KEY"));
    }

    #[test]
    fn test_config_clone() {
        let cfg = Config::default();
        let cloned = cfg.clone();
        assert_eq!(cfg.api_url, cloned.api_url);
        assert_eq!(cfg.listen_addr, cloned.listen_addr);
    }

    #[test]
    fn test_cache_backend_from_str() {
        assert_eq!(CacheBackend::from_str("memory"), CacheBackend::Memory);
        assert_eq!(CacheBackend::from_str("MEMORY"), CacheBackend::Memory);
        assert_eq!(CacheBackend::from_str("mem"), CacheBackend::Memory);
        assert_eq!(CacheBackend::from_str("redis"), CacheBackend::Redis);
        assert_eq!(CacheBackend::from_str("unknown"), CacheBackend::Redis);
    }

    #[test]
    fn test_load_config_with_api_settings() {
        std::env::set_var("BINREGION_API_URL", "http://localhost:9999");
        std::env::set_var("BINREGION_API_KEY", "abc");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.api_url, "http://localhost:9999");
        assert_eq!(cfg.api_key, "abc");
        std::env::remove_var("BINREGION_API_URL");
        std::env::remove_var("BINREGION_API_KEY");
    }

    #[test]
    fn test_load_config_with_custom_timeout() {
        std::env::set_var("BINREGION_REQUEST_TIMEOUT_SECS", "2");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.request_timeout_secs, 2);
        std::env::remove_var("BINREGION_REQUEST_TIMEOUT_SECS");
    }

    #[test]
    fn test_load_config_with_memory_backend() {
        std::env::set_var("BINREGION_CACHE_BACKEND", "memory");
        std::env::set_var("BINREGION_CACHE_GC_INTERVAL_SECS", "30");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.cache_backend, CacheBackend::Memory);
        assert_eq!(cfg.cache_gc_interval_secs, 30);
        std::env::remove_var("BINREGION_CACHE_BACKEND");
        std::env::remove_var("BINREGION_CACHE_GC_INTERVAL_SECS");
    }

    #[test]
    fn test_load_config_with_redis_url() {
        std::env::set_var("BINREGION_REDIS_URL", "redis://cache:6380");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.redis_url, "redis://cache:6380");
        std::env::remove_var("BINREGION_REDIS_URL");
    }

    #[test]
    fn test_load_config_parse_error_uses_default() {
        std::env::set_var("BINREGION_CACHE_TTL_SECS", "not_a_number");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.cache_ttl_secs, 2_592_000); // default
        std::env::remove_var("BINREGION_CACHE_TTL_SECS");
    }

    #[test]
    fn test_load_config_with_listen_addr() {
        std::env::set_var("BINREGION_LISTEN_ADDR", "127.0.0.1:9000");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
        std::env::remove_var("BINREGION_LISTEN_ADDR");
    }
}
