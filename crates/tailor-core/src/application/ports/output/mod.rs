//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `tailor-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::TailorResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `tailor_adapters::filesystem::LocalFilesystem` (production)
/// - `tailor_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Text only: every file the tool touches is read and written whole
/// - Paths are passed through untouched; callers resolve them against the
///   template root
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> TailorResult<String>;

    /// Replace a file's content.
    fn write_string(&self, path: &Path, content: &str) -> TailorResult<()>;

    /// Move a file or directory, contents included.
    fn rename(&self, from: &Path, to: &Path) -> TailorResult<()>;

    /// Every file (or symlink to a file) under `root`, at any depth, whose
    /// extension is exactly `extension`.
    fn walk_files(&self, root: &Path, extension: &str) -> TailorResult<Vec<PathBuf>>;
}
