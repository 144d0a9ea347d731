//! In-memory [`FileStore`] for pipeline tests.

use pattern_fs::{Error, FileStore, NormalizedPath, Result};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::rc::Rc;

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<NormalizedPath, String>,
    dirs: BTreeSet<NormalizedPath>,
    failing_writes: BTreeSet<NormalizedPath>,
    unavailable_dirs: BTreeSet<NormalizedPath>,
    writes: usize,
}

/// A [`FileStore`] held entirely in memory.
///
/// Clones share state, so a test can hand one clone to the code under test
/// and inspect the other afterwards.
///
/// # Example
///
/// ```rust
/// use pattern_fs::{FileStore, NormalizedPath};
/// use pattern_test_utils::MemoryFileStore;
///
/// let files = MemoryFileStore::new();
/// let path = NormalizedPath::new("/theme/patterns/hero.php");
/// files.fail_writes_to(&path);
/// assert!(files.write_text(&path, "x").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFileStore {
    state: Rc<RefCell<State>>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (and its parent directory) without counting as a write.
    pub fn insert_file(&self, path: impl Into<NormalizedPath>, text: impl Into<String>) {
        let path = path.into();
        let mut state = self.state.borrow_mut();
        if let Some(parent) = path.parent() {
            state.dirs.insert(parent);
        }
        state.files.insert(path, text.into());
    }

    /// Current text of a file, if present.
    pub fn file(&self, path: impl Into<NormalizedPath>) -> Option<String> {
        self.state.borrow().files.get(&path.into()).cloned()
    }

    /// Every stored file path, sorted.
    pub fn paths(&self) -> Vec<NormalizedPath> {
        self.state.borrow().files.keys().cloned().collect()
    }

    /// Make every later write to `path` fail with a permission error.
    pub fn fail_writes_to(&self, path: &NormalizedPath) {
        self.state.borrow_mut().failing_writes.insert(path.clone());
    }

    /// Make `ensure_dir` fail for `dir`.
    pub fn make_dir_unavailable(&self, dir: &NormalizedPath) {
        self.state.borrow_mut().unavailable_dirs.insert(dir.clone());
    }

    /// Number of successful `write_text` calls.
    pub fn write_count(&self) -> usize {
        self.state.borrow().writes
    }
}

impl FileStore for MemoryFileStore {
    fn exists(&self, path: &NormalizedPath) -> bool {
        let state = self.state.borrow();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn ensure_dir(&self, dir: &NormalizedPath) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.unavailable_dirs.contains(dir) || state.files.contains_key(dir) {
            return Err(Error::DirectoryUnavailable {
                path: dir.to_native(),
            });
        }
        state.dirs.insert(dir.clone());
        Ok(())
    }

    fn list_files(&self, dir: &NormalizedPath, extension: &str) -> Result<Vec<NormalizedPath>> {
        let state = self.state.borrow();
        Ok(state
            .files
            .keys()
            .filter(|path| path.parent().as_ref() == Some(dir))
            .filter(|path| path.extension() == Some(extension))
            .cloned()
            .collect())
    }

    fn read_text(&self, path: &NormalizedPath) -> Result<String> {
        self.state
            .borrow()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| {
                Error::io(
                    path.to_native(),
                    io::Error::new(io::ErrorKind::NotFound, "no such file"),
                )
            })
    }

    fn write_text(&self, path: &NormalizedPath, text: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.failing_writes.contains(path) {
            return Err(Error::io(
                path.to_native(),
                io::Error::new(io::ErrorKind::PermissionDenied, "write refused"),
            ));
        }
        state.files.insert(path.clone(), text.to_string());
        state.writes += 1;
        Ok(())
    }
}
