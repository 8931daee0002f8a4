//! Domain Layer
//!
//! Entities, value objects, pure services and the outbound ports
//! the application layer depends on.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
