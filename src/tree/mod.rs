//! Project file tree abstraction
//!
//! The schematic never touches the filesystem directly; it goes through the
//! [`FileTree`] port so the pipeline can run against a real workspace on disk
//! or an in-memory tree in tests.

pub mod disk;
pub mod memory;

use thiserror::Error;

pub use disk::DiskTree;
pub use memory::MemoryTree;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Path escapes workspace root: {0}")]
    PathEscape(String),
    #[error("File is not valid UTF-8: {0}")]
    InvalidUtf8(String),
    #[error("IO error: {0}")]
    IoError(String),
}

/// Text-file access for one schematic invocation.
///
/// Paths are workspace-relative, `/`-separated. The tree is exclusively owned
/// by the invocation; writes take effect immediately.
pub trait FileTree {
    /// Read a file's text content.
    fn read(&self, path: &str) -> Result<String, TreeError>;

    /// Replace a file's content, creating it if absent.
    fn overwrite(&mut self, path: &str, content: &str) -> Result<(), TreeError>;

    /// Whether a file exists at the given path.
    fn exists(&self, path: &str) -> bool;
}
