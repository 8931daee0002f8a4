use crate::domain::ports::CacheError;

/// Failures that abort a lookup.
///
/// Remote service failures are not errors; they are reported as
/// `Resolution` variants. Only the cache store can abort a lookup.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error(transparent)]
    Cache(#[from] CacheError),
}
