//! File access for the quote updater
//!
//! The updater only ever touches a handful of files, all named relative to
//! one directory. Going through [`Workspace`] keeps the rendering pipeline
//! testable without a real filesystem.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Read/write access to files named relative to a root
pub trait Workspace {
    /// Read a whole file as UTF-8
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Create or replace a file
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Workspace backed by a directory on disk
#[derive(Debug, Clone)]
pub struct FsWorkspace {
    root: PathBuf,
}

impl FsWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a path against the root; absolute paths pass through
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Workspace for FsWorkspace {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(self.resolve(path))
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(self.resolve(path), contents)
    }
}

/// In-memory workspace
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkspace {
    files: HashMap<PathBuf, String>,
}

impl MemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file
    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(|s| s.as_str())
    }
}

impl Workspace for MemoryWorkspace {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
