//! Filesystem-based profile loader.
//!
//! A template may describe itself with a `tailor.toml` at its root. Every key
//! is optional; anything left out falls back to the built-in Python package
//! profile.
//!
//! # `tailor.toml` format
//!
//! ```toml
//! [template]
//! package_name    = "pypackage_template"
//! author          = "Marcus Sherman"
//! email           = "m.sherman@northeastern.edu"
//! description     = "A fully featured Python package template"
//! github_username = "betteridiot"
//!
//! [layout]
//! files          = ["pyproject.toml", "README.md"]
//! package_parent = "src"
//! source_roots   = ["src", "tests"]
//! extension      = "py"
//! ```

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use tailor_core::domain::{
    CustomizationPlan, DomainError, DomainValidator, Identity, RelativePath,
};

use crate::builtin_profile;

/// File name looked up at the template root.
pub const PROFILE_FILE_NAME: &str = "tailor.toml";

/// Where a profile came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "built-in (python package)"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A template's placeholder identity together with its layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomizationProfile {
    pub template: Identity,
    pub plan: CustomizationPlan,
    pub source: ProfileSource,
}

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of a `tailor.toml` file.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileManifest {
    #[serde(default)]
    pub template: TemplateSection,
    #[serde(default)]
    pub layout: LayoutSection,
}

/// `[template]` section: the placeholder values currently in the template.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateSection {
    pub package_name: Option<String>,
    pub author: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub github_username: Option<String>,
}

/// `[layout]` section: which paths a run touches.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutSection {
    pub files: Option<Vec<String>>,
    pub package_parent: Option<String>,
    pub source_roots: Option<Vec<String>>,
    pub extension: Option<String>,
}

impl ProfileManifest {
    /// A manifest spelling out every value of `profile`.
    pub fn from_profile(profile: &CustomizationProfile) -> Self {
        let t = &profile.template;
        let plan = &profile.plan;
        Self {
            template: TemplateSection {
                package_name: Some(t.package_name.clone()),
                author: Some(t.author.clone()),
                email: Some(t.email.clone()),
                description: Some(t.description.clone()),
                github_username: Some(t.github_username.clone()),
            },
            layout: LayoutSection {
                files: Some(plan.files().iter().map(ToString::to_string).collect()),
                package_parent: Some(plan.package_parent().to_string()),
                source_roots: Some(plan.source_roots().iter().map(ToString::to_string).collect()),
                extension: Some(plan.extension().to_owned()),
            },
        }
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, DomainError> {
        toml::to_string_pretty(self)
            .map_err(|e| DomainError::InvalidProfile(format!("failed to serialise profile: {e}")))
    }

    /// Fill every missing key from the built-in profile.
    pub fn into_profile(self, source: ProfileSource) -> Result<CustomizationProfile, DomainError> {
        let builtin = builtin_profile::python_package();
        let t = self.template;
        let template = Identity {
            package_name: t.package_name.unwrap_or(builtin.template.package_name),
            author: t.author.unwrap_or(builtin.template.author),
            email: t.email.unwrap_or(builtin.template.email),
            description: t.description.unwrap_or(builtin.template.description),
            github_username: t.github_username.unwrap_or(builtin.template.github_username),
        };
        DomainValidator::validate_package_name(&template.package_name)?;

        let layout = self.layout;
        let files = match layout.files {
            Some(files) => relative_paths(files)?,
            None => builtin.plan.files().to_vec(),
        };
        let package_parent = match layout.package_parent {
            Some(parent) => relative_path(parent)?,
            None => builtin.plan.package_parent().clone(),
        };
        let source_roots = match layout.source_roots {
            Some(roots) => relative_paths(roots)?,
            None => builtin.plan.source_roots().to_vec(),
        };
        let extension = layout
            .extension
            .unwrap_or_else(|| builtin.plan.extension().to_owned());

        let plan = CustomizationPlan::new(files, package_parent, source_roots, extension)?;

        Ok(CustomizationProfile {
            template,
            plan,
            source,
        })
    }
}

fn relative_path(raw: String) -> Result<RelativePath, DomainError> {
    RelativePath::try_new(raw.replace('\\', "/"))
}

fn relative_paths(raw: Vec<String>) -> Result<Vec<RelativePath>, DomainError> {
    raw.into_iter().map(relative_path).collect()
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Resolves the profile for one template root.
///
/// # Example
///
/// ```no_run
/// use tailor_adapters::ProfileLoader;
///
/// let profile = ProfileLoader::new(".").load(None)?;
/// println!("customizing {}", profile.template.package_name);
/// # Ok::<(), tailor_core::domain::DomainError>(())
/// ```
pub struct ProfileLoader {
    root: PathBuf,
}

impl ProfileLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the profile file at the root, whether or not it exists.
    pub fn default_path(&self) -> PathBuf {
        self.root.join(PROFILE_FILE_NAME)
    }

    /// Load the profile for the root.
    ///
    /// An `explicit` file must exist. Without one, `<root>/tailor.toml` is
    /// used when present and the built-in profile otherwise.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidProfile`] if the file cannot be read or parsed,
    /// plus any validation error from the paths or extension it declares.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn load(&self, explicit: Option<&Path>) -> Result<CustomizationProfile, DomainError> {
        if let Some(path) = explicit {
            return self.load_file(path);
        }

        let path = self.default_path();
        if path.is_file() {
            return self.load_file(&path);
        }

        debug!("no {} at root, using built-in profile", PROFILE_FILE_NAME);
        Ok(builtin_profile::python_package())
    }

    /// Load and parse one profile file.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn load_file(&self, path: &Path) -> Result<CustomizationProfile, DomainError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            DomainError::InvalidProfile(format!("failed to read '{}': {e}", path.display()))
        })?;

        let profile = Self::parse(&raw, ProfileSource::File(path.to_path_buf()))?;
        info!(
            package = %profile.template.package_name,
            files = profile.plan.files().len(),
            "profile loaded"
        );
        Ok(profile)
    }

    /// Parse profile text.
    pub fn parse(raw: &str, source: ProfileSource) -> Result<CustomizationProfile, DomainError> {
        let manifest: ProfileManifest = toml::from_str(raw).map_err(|e| {
            DomainError::InvalidProfile(format!("failed to parse {source}: {e}"))
        })?;
        manifest.into_profile(source)
    }
}
