//! Application layer errors.
//!
//! These errors represent failures in orchestration, not substitution rules.
//! Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The package directory cannot be renamed onto an existing path.
    #[error("Cannot rename package directory: {path} already exists")]
    RenameTargetExists { path: PathBuf },

    /// The template root does not exist or is not a directory.
    #[error("Template root not found: {path}")]
    RootNotFound { path: PathBuf },

    /// Shared state lock poisoned (in-memory adapters).
    #[error("Filesystem lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read and write permissions".into(),
                "Ensure the file is valid UTF-8 text".into(),
            ],
            Self::RenameTargetExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Was the template already customized? Run: tailor check".into(),
                "Remove or move the existing directory and try again".into(),
            ],
            Self::RootNotFound { path } => vec![
                format!("'{}' is not a directory", path.display()),
                "Pass the template checkout with --root".into(),
            ],
            Self::LockPoisoned => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
            Self::RenameTargetExists { .. } => ErrorCategory::Validation,
            Self::RootNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}
