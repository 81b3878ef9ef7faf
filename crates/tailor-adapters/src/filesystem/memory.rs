//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use tailor_core::{
    application::{ApplicationError, ports::Filesystem},
    error::TailorResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle after boxing one into a
/// service.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_ancestors(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        let mut components = path.components().peekable();
        while let Some(component) = components.next() {
            if components.peek().is_none() {
                break;
            }
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories.
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) -> &Self {
        let path = path.into();
        if let Ok(mut inner) = self.inner.write() {
            inner.add_ancestors(&path);
            inner.files.insert(path, content.into());
        }
        self
    }

    /// Add an (empty) directory and its ancestors.
    pub fn add_dir(&self, path: impl Into<PathBuf>) -> &Self {
        let path = path.into();
        if let Ok(mut inner) = self.inner.write() {
            inner.add_ancestors(&path);
            inner.directories.insert(path);
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> TailorResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn write_string(&self, path: &Path, content: &str) -> TailorResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> TailorResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if let Some(content) = inner.files.remove(from) {
            inner.add_ancestors(to);
            inner.files.insert(to.to_path_buf(), content);
            return Ok(());
        }

        if !inner.directories.contains(from) {
            return Err(ApplicationError::FilesystemError {
                path: from.to_path_buf(),
                reason: "No such file or directory".into(),
            }
            .into());
        }

        let moved_dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter(|d| d.starts_with(from))
            .cloned()
            .collect();
        let moved_files: Vec<PathBuf> = inner
            .files
            .keys()
            .filter(|f| f.starts_with(from))
            .cloned()
            .collect();

        for dir in moved_dirs {
            inner.directories.remove(&dir);
            inner.directories.insert(rebase(&dir, from, to));
        }
        for file in moved_files {
            if let Some(content) = inner.files.remove(&file) {
                inner.files.insert(rebase(&file, from, to), content);
            }
        }
        inner.add_ancestors(to);

        Ok(())
    }

    fn walk_files(&self, root: &Path, extension: &str) -> TailorResult<Vec<PathBuf>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        Ok(inner
            .files
            .keys()
            .filter(|p| p.starts_with(root) && p.as_path() != root)
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(extension))
            .cloned()
            .collect())
    }
}

/// `path` with its `from` prefix swapped for `to`.
fn rebase(path: &Path, from: &Path, to: &Path) -> PathBuf {
    match path.strip_prefix(from) {
        Ok(rel) if !rel.as_os_str().is_empty() => to.join(rel),
        _ => to.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_file_creates_parents() {
        let fs = MemoryFilesystem::new();
        fs.add_file("t/src/pkg/__init__.py", "");
        assert!(fs.is_dir(Path::new("t")));
        assert!(fs.is_dir(Path::new("t/src/pkg")));
        assert!(!fs.is_dir(Path::new("t/src/pkg/__init__.py")));
        assert!(fs.exists(Path::new("t/src/pkg/__init__.py")));
    }

    #[test]
    fn rename_directory_moves_everything_under_it() {
        let fs = MemoryFilesystem::new();
        fs.add_file("t/src/old/__init__.py", "a")
            .add_file("t/src/old/sub/mod.py", "b")
            .add_dir("t/src/old/empty");

        fs.rename(Path::new("t/src/old"), Path::new("t/src/new"))
            .unwrap();

        assert!(!fs.exists(Path::new("t/src/old")));
        assert!(!fs.exists(Path::new("t/src/old/__init__.py")));
        assert_eq!(fs.read_file("t/src/new/__init__.py").as_deref(), Some("a"));
        assert_eq!(fs.read_file("t/src/new/sub/mod.py").as_deref(), Some("b"));
        assert!(fs.is_dir(Path::new("t/src/new/empty")));
    }

    #[test]
    fn rename_missing_source_is_error() {
        let fs = MemoryFilesystem::new();
        assert!(fs.rename(Path::new("a"), Path::new("b")).is_err());
    }

    #[test]
    fn walk_filters_by_extension_and_root() {
        let fs = MemoryFilesystem::new();
        fs.add_file("t/src/a.py", "")
            .add_file("t/src/x/b.py", "")
            .add_file("t/src/c.txt", "")
            .add_file("t/tests/d.py", "");

        let found = fs.walk_files(Path::new("t/src"), "py").unwrap();
        assert_eq!(
            found,
            vec![PathBuf::from("t/src/a.py"), PathBuf::from("t/src/x/b.py")]
        );
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_string(Path::new("nope/file.txt"), "x").is_err());
        fs.add_dir("yes");
        assert!(fs.write_string(Path::new("yes/file.txt"), "x").is_ok());
    }
}
