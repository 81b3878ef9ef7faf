use tracing::warn;

use crate::domain::{DomainError, Identity};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// A package name becomes a directory name, so it must be a single,
    /// visible path component.
    ///
    /// Names that are not identifiers (`my-lib`) are accepted with a warning:
    /// the directory is still renamed, but `import my-lib` will not work.
    pub fn validate_package_name(name: &str) -> Result<(), DomainError> {
        let reject = |reason: &str| {
            Err(DomainError::InvalidPackageName {
                name: name.into(),
                reason: reason.into(),
            })
        };

        if name.trim().is_empty() {
            return reject("name cannot be empty");
        }
        if name == "." || name == ".." {
            return reject("name cannot be a relative directory marker");
        }
        if name.starts_with('.') {
            return reject("name cannot start with '.'");
        }
        if name.contains('/') || name.contains('\\') {
            return reject("name cannot contain path separators");
        }

        if !is_identifier(name) {
            warn!(name, "package name is not a valid identifier; imports may break");
        }
        Ok(())
    }

    /// Every identity field must be non-empty; the package name must pass
    /// [`validate_package_name`](Self::validate_package_name).
    pub fn validate_identity(identity: &Identity) -> Result<(), DomainError> {
        Self::validate_package_name(&identity.package_name)?;
        for (field, value) in identity.fields() {
            if value.is_empty() {
                return Err(DomainError::MissingRequiredField { field });
            }
        }
        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names_pass() {
        for name in ["mylib", "my_package", "tools2", "_private", "my-lib"] {
            assert!(
                DomainValidator::validate_package_name(name).is_ok(),
                "failed for: {name}"
            );
        }
    }

    #[test]
    fn rejects_empty_and_hidden_names() {
        for name in ["", "   ", ".", "..", ".hidden"] {
            assert!(
                matches!(
                    DomainValidator::validate_package_name(name),
                    Err(DomainError::InvalidPackageName { .. })
                ),
                "accepted: {name:?}"
            );
        }
    }

    #[test]
    fn rejects_path_separators() {
        assert!(DomainValidator::validate_package_name("a/b").is_err());
        assert!(DomainValidator::validate_package_name("a\\b").is_err());
    }

    #[test]
    fn identifier_check() {
        assert!(is_identifier("mylib"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier("1lib"));
        assert!(!is_identifier("my-lib"));
    }

    #[test]
    fn identity_requires_every_field() {
        let mut id = Identity::new("mylib", "Ada", "ada@example.com", "Tools", "ada");
        assert!(DomainValidator::validate_identity(&id).is_ok());

        id.email.clear();
        assert_eq!(
            DomainValidator::validate_identity(&id),
            Err(DomainError::MissingRequiredField { field: "email" })
        );
    }
}
