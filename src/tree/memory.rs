//! In-memory file tree for tests and dry runs

use crate::tree::{FileTree, TreeError};
use std::collections::HashMap;

/// File tree backed by a path → content map.
#[derive(Debug, Default, Clone)]
pub struct MemoryTree {
    files: HashMap<String, String>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, builder-style.
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }
}

impl FileTree for MemoryTree {
    fn read(&self, path: &str) -> Result<String, TreeError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| TreeError::FileNotFound(path.to_string()))
    }

    fn overwrite(&mut self, path: &str, content: &str) -> Result<(), TreeError> {
        self.files.insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }
}
