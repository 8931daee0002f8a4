//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::{Deserialize, Serialize};

/// ISO 3166-1 alpha-2 codes classified as `EU`.
///
/// EU member states plus the EEA/EFTA members Iceland, Liechtenstein,
/// Norway and Switzerland.
pub const EU_COUNTRIES_ALPHA2: [&str; 31] = [
    "AT", "BE", "BG", "HR", "CY", "CZ", "DK", "EE", "FI", "FR", "DE", "GR", "HU", "IE", "IT",
    "LV", "LT", "LU", "MT", "NL", "PL", "PT", "RO", "SK", "SI", "ES", "SE", "IS", "LI", "NO",
    "CH",
];

/// ISO 3166-1 alpha-2 code for Serbia.
pub const SERBIA_ALPHA2: &str = "RS";

/// Region bucket a card-issuing country falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// European Union / EEA
    #[serde(rename = "EU")]
    Eu,
    /// Serbia
    #[serde(rename = "RS")]
    Rs,
    /// Any other resolved country
    #[serde(rename = "OTHER")]
    Other,
    /// No country available
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl Classification {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eu => "EU",
            Self::Rs => "RS",
            Self::Other => "OTHER",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self::Unknown
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of resolving a BIN to its issuing country.
///
/// Only `Country` carries domain data. Every other variant describes why
/// no country is available; none of them are ever cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Issuing country (ISO 3166-1 alpha-2)
    Country(String),
    /// The BIN service answered but had no country for this BIN
    NotFound,
    /// The BIN service answered 429
    RateLimited,
    /// The BIN service answered with another non-200 status
    Http(u16),
    /// Request failed before a usable response was obtained
    ClientError(String),
    /// Request exceeded the per-request timeout
    Timeout,
}

impl Resolution {
    /// The resolved country code, if any.
    pub fn country(&self) -> Option<&str> {
        match self {
            Self::Country(code) => Some(code.as_str()),
            _ => None,
        }
    }

    /// Whether this outcome may be written back to the cache.
    pub fn is_cacheable(&self) -> bool {
        matches!(self, Self::Country(_))
    }

    /// Render as the flat string channel used on the wire.
    ///
    /// Country codes pass through unchanged; failures become
    /// `RATE_LIMIT`, `HTTP_<status>`, `CLIENT_ERROR: <msg>` or `TIMEOUT`.
    /// `NotFound` has no rendering.
    pub fn as_legacy(&self) -> Option<String> {
        match self {
            Self::Country(code) => Some(code.clone()),
            Self::NotFound => None,
            Self::RateLimited => Some("RATE_LIMIT".to_string()),
            Self::Http(status) => Some(format!("HTTP_{}", status)),
            Self::ClientError(msg) => Some(format!("CLIENT_ERROR: {}", msg)),
            Self::Timeout => Some("TIMEOUT".to_string()),
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_legacy() {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "NOT_FOUND"),
        }
    }
}
