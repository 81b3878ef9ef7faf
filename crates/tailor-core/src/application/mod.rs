//! Application layer for Tailor.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CustomizeService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! substitution logic itself. The rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{CustomizeService, RunMode};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
