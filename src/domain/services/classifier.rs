//! Country Classifier Service
//!
//! Pure domain logic mapping a country code to a region bucket.
//! This service has NO external dependencies - it's pure Rust.

use crate::domain::value_objects::{Classification, Resolution, EU_COUNTRIES_ALPHA2, SERBIA_ALPHA2};

/// Classifier for card-issuing countries.
pub struct CountryClassifier;

impl CountryClassifier {
    /// Classify a country code.
    ///
    /// Absent or empty input is `Unknown`. Any other string that is not
    /// `RS` or an EU/EEA code is `Other`, including failure markers such
    /// as `RATE_LIMIT`. Matching is exact (case-sensitive).
    pub fn classify(country_alpha2: Option<&str>) -> Classification {
        let code = match country_alpha2 {
            Some(code) if !code.is_empty() => code,
            _ => return Classification::Unknown,
        };

        if code == SERBIA_ALPHA2 {
            Classification::Rs
        } else if Self::is_eu(code) {
            Classification::Eu
        } else {
            Classification::Other
        }
    }

    /// Classify a resolution outcome.
    ///
    /// Only a resolved country is classified; operational failures and
    /// missing data are `Unknown`.
    pub fn classify_resolution(resolution: &Resolution) -> Classification {
        match resolution {
            Resolution::Country(code) => Self::classify(Some(code.as_str())),
            _ => Classification::Unknown,
        }
    }

    pub fn is_eu(code: &str) -> bool {
        EU_COUNTRIES_ALPHA2.contains(&code)
    }
}
