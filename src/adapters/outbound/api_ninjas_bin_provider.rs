//! API Ninjas BIN Provider
//!
//! Implements BinInfoProvider using the API Ninjas `/v1/bin` endpoint.
//!
//! See: https://api-ninjas.com/api/bin

use crate::domain::entities::BinKey;
use crate::domain::ports::BinInfoProvider;
use crate::domain::value_objects::Resolution;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

/// Single entry of the BIN endpoint's list response.
#[derive(Debug, Deserialize)]
struct BinRecord {
    #[serde(default)]
    iso_code2: Option<String>,
}

/// Configuration for the BIN information service.
#[derive(Clone)]
pub struct BinApiConfig {
    /// Base URL (e.g., "https://api.api-ninjas.com")
    pub base_url: String,
    /// Value sent in the `X-Api-Key` header
    pub api_key: String,
    /// Per-request timeout covering connect, send and body read
    pub timeout: Duration,
}

impl Default for BinApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.api-ninjas.com".to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(5),
        }
    }
}

impl std::fmt::Debug for BinApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// API Ninjas BIN lookup client.
pub struct ApiNinjasBinProvider {
    config: BinApiConfig,
    client: reqwest::Client,
}

impl ApiNinjasBinProvider {
    /// Create a provider with its own HTTP client.
    pub fn new(config: BinApiConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/bin", self.config.base_url.trim_end_matches('/'))
    }

    /// Extract the country from the first record of a 200 body.
    ///
    /// Later records are never inspected.
    fn parse_country(body: serde_json::Value) -> Option<String> {
        let first = body.as_array()?.first()?;
        BinRecord::deserialize(first)
            .ok()?
            .iso_code2
            .filter(|code| !code.is_empty())
    }

    fn transport_failure(bin: &BinKey, err: reqwest::Error) -> Resolution {
        if err.is_timeout() {
            tracing::warn!("bin lookup timed out for {}", bin);
            Resolution::Timeout
        } else {
            tracing::error!("bin lookup failed for {}: {}", bin, err);
            Resolution::ClientError(err.to_string())
        }
    }
}

#[async_trait]
impl BinInfoProvider for ApiNinjasBinProvider {
    async fn lookup(&self, bin: &BinKey) -> Resolution {
        let response = match self
            .client
            .get(self.endpoint())
            .query(&[("bin", bin.as_str())])
            .header("X-Api-Key", &self.config.api_key)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Self::transport_failure(bin, e),
        };

        match response.status() {
            StatusCode::OK => match response.json::<serde_json::Value>().await {
                Ok(body) => match Self::parse_country(body) {
                    Some(code) => Resolution::Country(code),
                    None => {
                        tracing::debug!("no country in bin service response for {}", bin);
                        Resolution::NotFound
                    }
                },
                Err(e) => Self::transport_failure(bin, e),
            },
            StatusCode::TOO_MANY_REQUESTS => {
                tracing::warn!("bin service rate limit hit for {}", bin);
                Resolution::RateLimited
            }
            status => {
                tracing::warn!("bin service returned {} for {}", status, bin);
                Resolution::Http(status.as_u16())
            }
        }
    }
}
