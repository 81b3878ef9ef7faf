//! What a customization run touches.

use crate::domain::{DomainError, RelativePath};

/// Files, package directory, and source trees that customization rewrites.
///
/// All paths are relative to the template root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomizationPlan {
    files: Vec<RelativePath>,
    package_parent: RelativePath,
    source_roots: Vec<RelativePath>,
    extension: String,
}

impl CustomizationPlan {
    /// Create a plan.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidExtension`] if `extension` is empty or contains a
    /// dot or path separator.
    pub fn new(
        files: Vec<RelativePath>,
        package_parent: RelativePath,
        source_roots: Vec<RelativePath>,
        extension: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let extension = extension.into();
        if extension.is_empty() || extension.contains(['.', '/', '\\']) {
            return Err(DomainError::InvalidExtension { extension });
        }
        Ok(Self {
            files,
            package_parent,
            source_roots,
            extension,
        })
    }

    /// Fixed files rewritten before the package rename.
    pub fn files(&self) -> &[RelativePath] {
        &self.files
    }

    /// Directory holding the package directory (e.g. `src`).
    pub fn package_parent(&self) -> &RelativePath {
        &self.package_parent
    }

    /// Trees searched recursively for source files.
    pub fn source_roots(&self) -> &[RelativePath] {
        &self.source_roots
    }

    /// Source file extension, without the dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }
}
