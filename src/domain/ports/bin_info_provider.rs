//! BIN Information Provider Port
//!
//! Defines the interface for resolving a BIN against a remote service.

use crate::domain::entities::BinKey;
use crate::domain::value_objects::Resolution;
use async_trait::async_trait;

/// Remote source of BIN-to-country data.
///
/// This is an outbound port. Implementations make exactly one attempt
/// per call and report every failure as a `Resolution` variant, so
/// callers never see an error channel from here.
#[async_trait]
pub trait BinInfoProvider: Send + Sync {
    /// Look up the issuing country for a BIN.
    async fn lookup(&self, bin: &BinKey) -> Resolution;
}
