//! Disk-backed file tree rooted at a workspace directory
//!
//! All paths are resolved relative to the root and validated so that a
//! schematic cannot read or write outside the workspace it was invoked on.

use crate::tree::{FileTree, TreeError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Maximum path length accepted from configuration input
const MAX_PATH_LENGTH: usize = 4096;

/// File tree over a real workspace directory.
pub struct DiskTree {
    root: PathBuf,
}

impl DiskTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate and resolve a workspace-relative path.
    ///
    /// Normalizes `.` and `..` components and rejects any path that would
    /// land above the workspace root.
    fn resolve(&self, relative_path: &str) -> Result<PathBuf, TreeError> {
        if relative_path.len() > MAX_PATH_LENGTH {
            return Err(TreeError::PathEscape(relative_path.to_string()));
        }

        let mut components = Vec::new();
        for component in relative_path.split(['/', '\\']) {
            match component {
                "" | "." => continue,
                ".." => {
                    if components.is_empty() {
                        warn!(path = relative_path, "Path escape attempt");
                        return Err(TreeError::PathEscape(relative_path.to_string()));
                    }
                    components.pop();
                }
                c => components.push(c),
            }
        }

        let mut full_path = self.root.clone();
        for component in components {
            full_path.push(component);
        }
        Ok(full_path)
    }
}

impl FileTree for DiskTree {
    fn read(&self, path: &str) -> Result<String, TreeError> {
        let full_path = self.resolve(path)?;
        let bytes = fs::read(&full_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TreeError::FileNotFound(path.to_string())
            } else {
                TreeError::IoError(e.to_string())
            }
        })?;
        String::from_utf8(bytes).map_err(|_| TreeError::InvalidUtf8(path.to_string()))
    }

    fn overwrite(&mut self, path: &str, content: &str) -> Result<(), TreeError> {
        let full_path = self.resolve(path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| TreeError::IoError(e.to_string()))?;
        }
        fs::write(&full_path, content).map_err(|e| TreeError::IoError(e.to_string()))
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).map(|p| p.is_file()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut tree = DiskTree::new(dir.path());

        assert!(!tree.exists("styles.css"));
        tree.overwrite("styles.css", "body {}\n").unwrap();
        assert!(tree.exists("styles.css"));
        assert_eq!(tree.read("styles.css").unwrap(), "body {}\n");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let tree = DiskTree::new(dir.path());
        assert!(matches!(
            tree.read("nope.scss"),
            Err(TreeError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_rejects_escape() {
        let dir = tempfile::tempdir().unwrap();
        let tree = DiskTree::new(dir.path());
        assert!(matches!(
            tree.read("../outside.json"),
            Err(TreeError::PathEscape(_))
        ));
        // `..` inside the tree is fine as long as it stays under the root
        let resolved = tree.resolve("apps/./app/../app/src/styles.scss").unwrap();
        assert_eq!(resolved, dir.path().join("apps/app/src/styles.scss"));
    }
}
