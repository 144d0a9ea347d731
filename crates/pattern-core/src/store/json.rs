//! JSON file record store
//!
//! The records file is replaced by temp-file-then-rename on every write, so
//! locks are taken on a sidecar `<stem>.lock` file that is never replaced.
//! Reads hold it shared; a write holds it exclusively from load to save, so
//! concurrent writers never lose each other's records or reuse an id.

use super::records::RecordSet;
use super::{PatternId, RecordFilter, RecordStore, StoredPattern};
use crate::{Error, Result};
use chrono::Utc;
use fs2::FileExt;
use pattern_fs::{NormalizedPath, StudioPath, io};
use pattern_meta::PatternRecord;
use std::fs::{self, File, OpenOptions};

/// [`RecordStore`] persisted as a single JSON document.
#[derive(Debug, Clone)]
pub struct JsonRecordStore {
    path: NormalizedPath,
}

impl JsonRecordStore {
    /// Store backed by the file at `path`. The file is created on first write.
    pub fn new(path: NormalizedPath) -> Self {
        Self { path }
    }

    /// Store at `.patterns/records.json` under a project root.
    pub fn at_root(root: &NormalizedPath) -> Self {
        Self::new(root.join(StudioPath::RecordsFile.as_str()))
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    /// The sidecar lock file, `records.lock` next to `records.json`.
    pub fn lock_path(&self) -> NormalizedPath {
        let name = format!("{}.lock", self.path.file_stem().unwrap_or("records"));
        match self.path.parent() {
            Some(parent) => parent.join(&name),
            None => NormalizedPath::new(name),
        }
    }

    fn open_lock(&self) -> Result<File> {
        let native = self.lock_path().to_native();
        if let Some(parent) = native.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&native)?)
    }

    fn load(&self) -> Result<RecordSet> {
        // Nothing written yet; a rename makes the file appear atomically
        if !self.path.is_file() {
            return Ok(RecordSet::default());
        }

        let lock = self.open_lock()?;
        lock.lock_shared()?;
        self.read_unlocked()
        // Lock released when `lock` is dropped
    }

    fn read_unlocked(&self) -> Result<RecordSet> {
        if !self.path.is_file() {
            return Ok(RecordSet::default());
        }
        let content = io::read_text(&self.path)?;
        serde_json::from_str(&content).map_err(|e| Error::StoreCorrupt {
            path: self.path.to_native(),
            message: e.to_string(),
        })
    }

    /// Load, apply `f` and save while holding the exclusive lock. Nothing is
    /// written when `f` fails or reports no change.
    fn modify<T>(&mut self, f: impl FnOnce(&mut RecordSet) -> Result<(T, bool)>) -> Result<T> {
        let lock = self.open_lock()?;
        lock.lock_exclusive()?;

        let mut records = self.read_unlocked()?;
        let (value, changed) = f(&mut records)?;
        if changed {
            let content = serde_json::to_string_pretty(&records)?;
            io::write_text(&self.path, &content)?;
            tracing::debug!(path = %self.path, "Saved record store");
        }
        Ok(value)
    }
}

impl RecordStore for JsonRecordStore {
    fn get(&self, id: PatternId) -> Result<Option<StoredPattern>> {
        Ok(self.load()?.get(id).cloned())
    }

    fn find_by_slug(&self, slug: &str) -> Result<Option<StoredPattern>> {
        Ok(self.load()?.find_by_slug(slug).cloned())
    }

    fn upsert(&mut self, id: Option<PatternId>, record: PatternRecord) -> Result<PatternId> {
        self.modify(|records| Ok((records.upsert(id, record, Utc::now())?, true)))
    }

    fn list(&self, filter: &RecordFilter) -> Result<Vec<StoredPattern>> {
        Ok(self.load()?.list(filter))
    }

    fn delete(&mut self, id: PatternId) -> Result<bool> {
        self.modify(|records| {
            let deleted = records.delete(id);
            Ok((deleted, deleted))
        })
    }
}
