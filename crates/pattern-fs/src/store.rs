//! File store abstraction
//!
//! The import/export pipeline never touches `std::fs` directly; it goes
//! through a [`FileStore`] so the same code can run against the real disk
//! ([`LocalFileStore`]) or an in-memory double in tests.

use crate::{Error, NormalizedPath, Result, io};
use std::fs;

/// Minimal filesystem surface needed to read and write pattern files.
pub trait FileStore {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &NormalizedPath) -> bool;

    /// Create `dir` (and any missing parents) if it does not exist yet.
    fn ensure_dir(&self, dir: &NormalizedPath) -> Result<()>;

    /// List regular files directly inside `dir` whose extension equals
    /// `extension` (without the leading dot). Sorted by path.
    ///
    /// A missing directory yields an empty list.
    fn list_files(&self, dir: &NormalizedPath, extension: &str) -> Result<Vec<NormalizedPath>>;

    /// Read a whole file as UTF-8 text.
    fn read_text(&self, path: &NormalizedPath) -> Result<String>;

    /// Replace the file at `path` with `text`. Implementations must not
    /// leave a partially written file behind on failure.
    fn write_text(&self, path: &NormalizedPath, text: &str) -> Result<()>;
}

/// [`FileStore`] backed by the local filesystem with atomic writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileStore;

impl LocalFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl FileStore for LocalFileStore {
    fn exists(&self, path: &NormalizedPath) -> bool {
        path.exists()
    }

    fn ensure_dir(&self, dir: &NormalizedPath) -> Result<()> {
        if dir.is_dir() {
            return Ok(());
        }
        let native = dir.to_native();
        fs::create_dir_all(&native).map_err(|e| Error::io(&native, e))?;
        if !dir.is_dir() {
            return Err(Error::DirectoryUnavailable { path: native });
        }
        Ok(())
    }

    fn list_files(&self, dir: &NormalizedPath, extension: &str) -> Result<Vec<NormalizedPath>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let native = dir.to_native();
        let mut files = Vec::new();
        for entry in fs::read_dir(&native).map_err(|e| Error::io(&native, e))? {
            let entry = entry.map_err(|e| Error::io(&native, e))?;
            let path = NormalizedPath::new(entry.path());
            if path.is_file() && path.extension() == Some(extension) {
                files.push(path);
            }
        }
        files.sort();

        tracing::debug!(dir = %dir, count = files.len(), "Listed pattern files");
        Ok(files)
    }

    fn read_text(&self, path: &NormalizedPath) -> Result<String> {
        io::read_text(path)
    }

    fn write_text(&self, path: &NormalizedPath, text: &str) -> Result<()> {
        io::write_text(path, text)
    }
}
