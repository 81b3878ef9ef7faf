//! The profile that ships with Tailor.
//!
//! Describes the Python package template: its placeholder identity and the
//! files it carries. Used whenever the template root has no `tailor.toml`,
//! and as the fallback for every key a `tailor.toml` leaves out.

use tailor_core::domain::{CustomizationPlan, Identity, RelativePath};

use crate::profile_loader::{CustomizationProfile, ProfileSource};

pub const PACKAGE_NAME: &str = "pypackage_template";
pub const AUTHOR: &str = "Marcus Sherman";
pub const EMAIL: &str = "m.sherman@northeastern.edu";
pub const DESCRIPTION: &str = "A fully featured Python package template";
pub const GITHUB_USERNAME: &str = "betteridiot";

/// Files rewritten before the package rename, relative to the template root.
pub const FILES: &[&str] = &[
    "pyproject.toml",
    "README.md",
    "docs/source/conf.py",
    ".github/workflows/ci.yml",
    ".github/workflows/docs.yml",
    ".github/workflows/publish.yml",
    "CONTRIBUTING.md",
    "LICENSE",
];

pub const PACKAGE_PARENT: &str = "src";
pub const SOURCE_ROOTS: &[&str] = &["src", "tests"];
pub const EXTENSION: &str = "py";

/// Placeholder identity of the Python package template.
pub fn python_identity() -> Identity {
    Identity::new(PACKAGE_NAME, AUTHOR, EMAIL, DESCRIPTION, GITHUB_USERNAME)
}

/// Layout of the Python package template.
pub fn python_plan() -> CustomizationPlan {
    // Constants above are relative and the extension is bare.
    match CustomizationPlan::new(
        FILES.iter().copied().map(RelativePath::from).collect(),
        RelativePath::from(PACKAGE_PARENT),
        SOURCE_ROOTS.iter().copied().map(RelativePath::from).collect(),
        EXTENSION,
    ) {
        Ok(plan) => plan,
        Err(e) => unreachable!("built-in plan is invalid: {e}"),
    }
}

/// The complete built-in profile.
pub fn python_package() -> CustomizationProfile {
    CustomizationProfile {
        template: python_identity(),
        plan: python_plan(),
        source: ProfileSource::Builtin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tailor_core::domain::ReplacementMap;

    #[test]
    fn builtin_plan_matches_python_layout() {
        let plan = python_plan();
        assert_eq!(plan.files().len(), 8);
        assert_eq!(plan.files()[0].as_path(), std::path::Path::new("pyproject.toml"));
        assert_eq!(plan.package_parent().to_string(), "src");
        assert_eq!(plan.extension(), "py");
        assert_eq!(
            plan.source_roots()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            vec!["src", "tests"]
        );
    }

    #[test]
    fn builtin_identity_has_distinct_values() {
        let template = python_identity();
        let project = tailor_core::domain::Identity::new("a", "b", "c", "d", "e");
        let map = ReplacementMap::between(&template, &project).unwrap();
        assert_eq!(map.len(), 5);
        assert!(map.hazards().is_empty());
    }

    #[test]
    fn builtin_profile_is_tagged_builtin() {
        assert_eq!(python_package().source, ProfileSource::Builtin);
    }
}
