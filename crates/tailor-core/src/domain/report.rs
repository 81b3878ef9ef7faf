use std::path::PathBuf;

use serde::Serialize;

use crate::domain::OverlapHazard;

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// Content changed (or would change, in a dry run).
    Updated { replacements: usize },
    /// File exists but contains none of the keys.
    Unchanged,
    /// File does not exist; nothing was created.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

/// What happened to the package directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenameOutcome {
    Renamed { from: PathBuf, to: PathBuf },
    WouldRename { from: PathBuf, to: PathBuf },
    SourceMissing { from: PathBuf },
    /// Old and new package names are identical.
    SameName,
}

/// Summary of one customization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomizationReport {
    pub dry_run: bool,
    /// Fixed files from the plan, in plan order.
    pub files: Vec<FileOutcome>,
    pub rename: RenameOutcome,
    /// Discovered source files, sorted.
    pub sources: Vec<FileOutcome>,
    pub hazards: Vec<OverlapHazard>,
}

impl CustomizationReport {
    fn outcomes(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().chain(self.sources.iter())
    }

    pub fn updated_count(&self) -> usize {
        self.outcomes()
            .filter(|o| matches!(o.status, FileStatus::Updated { .. }))
            .count()
    }

    pub fn missing_count(&self) -> usize {
        self.outcomes()
            .filter(|o| o.status == FileStatus::Missing)
            .count()
    }

    pub fn total_replacements(&self) -> usize {
        self.outcomes()
            .map(|o| match o.status {
                FileStatus::Updated { replacements } => replacements,
                _ => 0,
            })
            .sum()
    }
}

/// A template string still present after customization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Residual {
    pub path: PathBuf,
    pub key: String,
    pub count: usize,
}
