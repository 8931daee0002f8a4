//! Application Layer
//!
//! Use cases that coordinate the domain ports.

mod bin_resolver;
mod error;
mod lookup_service;

pub use bin_resolver::{BinResolver, DEFAULT_CACHE_TTL};
pub use error::LookupError;
pub use lookup_service::LookupService;
