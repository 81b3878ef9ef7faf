//! Infrastructure adapters for Tailor.
//!
//! This crate implements the ports defined in `tailor-core::application::ports`
//! and knows where customization profiles come from.

pub mod builtin_profile;
pub mod filesystem;
pub mod profile_loader;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use profile_loader::{CustomizationProfile, PROFILE_FILE_NAME, ProfileLoader, ProfileSource};
