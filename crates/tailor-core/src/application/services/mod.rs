//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "customize a template" or "check for leftovers".

pub mod customize_service;

pub use customize_service::{CustomizeService, RunMode};
