//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of the BIN lookup domain.
//! They have no external dependencies and contain only business logic.

use crate::domain::value_objects::Classification;
use serde::{Deserialize, Serialize};

/// Number of leading characters of a card number that form the BIN.
pub const BIN_LENGTH: usize = 6;

/// Prefix of every cache key holding a resolved country.
pub const CACHE_KEY_PREFIX: &str = "bin_country:";

/// Bank Identification Number used as the lookup key.
///
/// Built from the first six characters of a card number or BIN.
/// Shorter inputs are kept as-is; no digit validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinKey(String);

impl BinKey {
    /// Derive the lookup key from a card number or BIN.
    pub fn from_number(number: &str) -> Self {
        let end = number
            .char_indices()
            .nth(BIN_LENGTH)
            .map(|(idx, _)| idx)
            .unwrap_or(number.len());
        Self(number[..end].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key under which the resolved country is cached.
    pub fn cache_key(&self) -> String {
        format!("{}{}", CACHE_KEY_PREFIX, self.0)
    }
}

impl std::fmt::Display for BinKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of looking up and classifying a BIN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRecord {
    /// The BIN exactly as supplied by the caller
    pub bin: String,
    /// Country code, or a failure marker such as `RATE_LIMIT`
    pub country_alpha2: Option<String>,
    /// Region bucket
    pub classification: Classification,
}

impl LookupRecord {
    pub fn new(bin: String, country_alpha2: Option<String>, classification: Classification) -> Self {
        Self {
            bin,
            country_alpha2,
            classification,
        }
    }
}
