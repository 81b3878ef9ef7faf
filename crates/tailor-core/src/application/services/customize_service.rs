//! Customize Service - main application orchestrator.
//!
//! This service runs the whole customization workflow:
//! 1. Rewrite the plan's fixed files
//! 2. Rename the package directory
//! 3. Discover source files and rewrite them
//!
//! Every rewrite is "read whole file, substitute, write whole file back".

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        CustomizationPlan, CustomizationReport, DomainValidator as validator, FileOutcome,
        FileStatus, Identity, RenameOutcome, ReplacementMap, Residual,
    },
    error::TailorResult,
};

/// Whether a run touches the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Apply,
    /// Compute the report, write nothing.
    DryRun,
}

impl RunMode {
    pub fn is_dry_run(self) -> bool {
        self == Self::DryRun
    }
}

/// Main customization service.
pub struct CustomizeService {
    filesystem: Box<dyn Filesystem>,
}

impl CustomizeService {
    /// Create a new service backed by the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Customize the template checked out at `root`.
    ///
    /// Fixed files first, then the package rename, then every source file
    /// found under the plan's source roots (discovered after the rename, so
    /// paths reflect the new package name).
    #[instrument(
        skip_all,
        fields(
            root = %root.as_ref().display(),
            package = %project.package_name,
            dry_run = mode.is_dry_run()
        )
    )]
    pub fn customize(
        &self,
        root: impl AsRef<Path>,
        plan: &CustomizationPlan,
        template: &Identity,
        project: &Identity,
        mode: RunMode,
    ) -> TailorResult<CustomizationReport> {
        let root = root.as_ref();

        if !self.filesystem.is_dir(root) {
            return Err(ApplicationError::RootNotFound {
                path: root.to_path_buf(),
            }
            .into());
        }

        validator::validate_package_name(&template.package_name)?;
        validator::validate_identity(project)?;
        self.ensure_rename_possible(root, plan, &template.package_name, &project.package_name)?;

        let map = ReplacementMap::between(template, project)?;
        debug!(
            count = map.len(),
            keys = ?map.keys().collect::<Vec<_>>(),
            "replacement map built"
        );
        let hazards = map.hazards();
        for h in &hazards {
            warn!(
                key = %h.value_of,
                value = %h.value,
                contains = %h.contains_key,
                "replacement value contains a replacement key; a second run will rewrite it again"
            );
        }

        // 1. Fixed files
        let mut files = Vec::with_capacity(plan.files().len());
        for rel in plan.files() {
            let status = self.update_file(&rel.under(root), &map, mode)?;
            files.push(FileOutcome {
                path: rel.as_path().to_path_buf(),
                status,
            });
        }

        // 2. Package directory
        let rename = self.rename_package(
            &plan.package_parent().under(root),
            &template.package_name,
            &project.package_name,
            mode,
        )?;

        // 3. Source trees
        let roots: Vec<PathBuf> = plan.source_roots().iter().map(|r| r.under(root)).collect();
        let mut sources = Vec::new();
        for path in self.discover_sources(&roots, plan.extension())? {
            let status = self.update_file(&path, &map, mode)?;
            sources.push(FileOutcome {
                path: relative_to(&path, root),
                status,
            });
        }

        let report = CustomizationReport {
            dry_run: mode.is_dry_run(),
            files,
            rename,
            sources,
            hazards,
        };

        info!(
            updated = report.updated_count(),
            missing = report.missing_count(),
            replacements = report.total_replacements(),
            "Customization finished"
        );
        Ok(report)
    }

    /// Rewrite one file in place.
    ///
    /// A missing file is a no-op: no error, nothing created. The file is
    /// written back only when at least one key occurred.
    #[instrument(skip(self, map), fields(path = %path.display()))]
    pub fn update_file(
        &self,
        path: &Path,
        map: &ReplacementMap,
        mode: RunMode,
    ) -> TailorResult<FileStatus> {
        if !self.filesystem.exists(path) {
            debug!("file not found, skipping");
            return Ok(FileStatus::Missing);
        }
        if self.filesystem.is_dir(path) {
            warn!("expected a file but found a directory, skipping");
            return Ok(FileStatus::Missing);
        }

        let original = self.filesystem.read_to_string(path)?;
        let substitution = map.apply(&original);

        if !substitution.changed() {
            debug!("no template strings found");
            return Ok(FileStatus::Unchanged);
        }

        if !mode.is_dry_run() {
            self.filesystem.write_string(path, &substitution.text)?;
        }

        debug!(replacements = substitution.total(), "file rewritten");
        Ok(FileStatus::Updated {
            replacements: substitution.total(),
        })
    }

    /// Rename `parent/from` to `parent/to`.
    ///
    /// No-op when the source does not exist. Refuses to overwrite an existing
    /// destination.
    #[instrument(skip(self), fields(parent = %parent.display()))]
    pub fn rename_package(
        &self,
        parent: &Path,
        from: &str,
        to: &str,
        mode: RunMode,
    ) -> TailorResult<RenameOutcome> {
        if from == to {
            return Ok(RenameOutcome::SameName);
        }

        let old = parent.join(from);
        let new = parent.join(to);

        if !self.filesystem.exists(&old) {
            debug!(path = %old.display(), "package directory not found, skipping rename");
            return Ok(RenameOutcome::SourceMissing { from: old });
        }
        if self.filesystem.exists(&new) {
            return Err(ApplicationError::RenameTargetExists { path: new }.into());
        }

        if mode.is_dry_run() {
            return Ok(RenameOutcome::WouldRename { from: old, to: new });
        }

        self.filesystem.rename(&old, &new)?;
        info!(from = %old.display(), to = %new.display(), "package directory renamed");
        Ok(RenameOutcome::Renamed { from: old, to: new })
    }

    /// Fail when both `parent/from` and `parent/to` exist, before any file is
    /// touched.
    fn ensure_rename_possible(
        &self,
        root: &Path,
        plan: &CustomizationPlan,
        from: &str,
        to: &str,
    ) -> TailorResult<()> {
        if from == to {
            return Ok(());
        }
        let old = plan.package_parent().join(from)?.under(root);
        let new = plan.package_parent().join(to)?.under(root);
        if self.filesystem.exists(&old) && self.filesystem.exists(&new) {
            return Err(ApplicationError::RenameTargetExists { path: new }.into());
        }
        Ok(())
    }

    /// All files with `extension` under each existing root, sorted and
    /// deduplicated. Missing roots are skipped.
    pub fn discover_sources(&self, roots: &[PathBuf], extension: &str) -> TailorResult<Vec<PathBuf>> {
        let mut found = Vec::new();
        for root in roots {
            if !self.filesystem.is_dir(root) {
                debug!(root = %root.display(), "source root not found, skipping");
                continue;
            }
            found.extend(self.filesystem.walk_files(root, extension)?);
        }
        found.sort();
        found.dedup();
        debug!(count = found.len(), extension, "source files discovered");
        Ok(found)
    }

    /// Template strings still present under `root`.
    ///
    /// Scans the plan's fixed files and every source file. A package directory
    /// still carrying the template name is reported as one residual of the
    /// package name key.
    #[instrument(skip_all, fields(root = %root.as_ref().display()))]
    pub fn find_residuals(
        &self,
        root: impl AsRef<Path>,
        plan: &CustomizationPlan,
        template: &Identity,
    ) -> TailorResult<Vec<Residual>> {
        let root = root.as_ref();
        if !self.filesystem.is_dir(root) {
            return Err(ApplicationError::RootNotFound {
                path: root.to_path_buf(),
            }
            .into());
        }

        validator::validate_package_name(&template.package_name)?;

        let keys: Vec<&str> = template
            .fields()
            .iter()
            .map(|(_, v)| *v)
            .filter(|v| !v.is_empty())
            .collect();

        let mut residuals = Vec::new();

        let package_dir = plan
            .package_parent()
            .join(&template.package_name)?
            .under(root);
        if self.filesystem.is_dir(&package_dir) {
            residuals.push(Residual {
                path: relative_to(&package_dir, root),
                key: template.package_name.clone(),
                count: 1,
            });
        }

        let roots: Vec<PathBuf> = plan.source_roots().iter().map(|r| r.under(root)).collect();
        let mut paths: Vec<PathBuf> = plan.files().iter().map(|f| f.under(root)).collect();
        paths.extend(self.discover_sources(&roots, plan.extension())?);

        for path in paths {
            if !self.filesystem.exists(&path) || self.filesystem.is_dir(&path) {
                continue;
            }
            let text = self.filesystem.read_to_string(&path)?;
            for key in &keys {
                let count = text.matches(key).count();
                if count > 0 {
                    residuals.push(Residual {
                        path: relative_to(&path, root),
                        key: (*key).to_owned(),
                        count,
                    });
                }
            }
        }

        debug!(count = residuals.len(), "residual scan finished");
        Ok(residuals)
    }
}

fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
