// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside reports and retries)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Replacement map
    // ========================================================================
    #[error("Replacement keys cannot be empty")]
    EmptyReplacementKey,

    #[error("Duplicate replacement key: '{key}'")]
    DuplicateReplacementKey { key: String },

    // ========================================================================
    // Identity / naming
    // ========================================================================
    #[error("Invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Plan / profile
    // ========================================================================
    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path leaves the template root: {path}")]
    PathEscapesRoot { path: String },

    #[error("Invalid source extension '{extension}'")]
    InvalidExtension { extension: String },

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyReplacementKey => vec![
                "Every template value must be a non-empty string".into(),
                "Check the [template] section of tailor.toml".into(),
            ],
            Self::DuplicateReplacementKey { key } => vec![
                format!("'{}' is used for more than one template field", key),
                "Give each template field a distinct placeholder value".into(),
            ],
            Self::InvalidPackageName { name, reason } => vec![
                format!("Package name '{}' is invalid: {}", name, reason),
                "Use letters, digits and underscores".into(),
                "Examples: mylib, my_package, tools2".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("'{}' must be provided", field),
                "Pass it on the command line or set it in the [identity] config section".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' must be relative to the template root", path),
            ],
            Self::PathEscapesRoot { path } => vec![
                format!("'{}' contains a '..' component", path),
                "Profile paths must stay inside the template root".into(),
            ],
            Self::InvalidExtension { extension } => vec![
                format!("'{}' is not a usable file extension", extension),
                "Use a bare extension without a dot, e.g. \"py\"".into(),
            ],
            Self::InvalidProfile(msg) => vec![
                format!("Details: {}", msg),
                "Regenerate a profile with: tailor init --force".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProfile(_) => ErrorCategory::Configuration,
            _ => ErrorCategory::Validation,
        }
    }
}
