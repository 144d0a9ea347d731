//! Record to file export

use crate::directory::PatternDirectory;
use crate::store::{PatternId, RecordFilter, RecordStore, StoredPattern};
use crate::{Error, Result};
use pattern_fs::checksum::compute_content_checksum;
use pattern_fs::{FileStore, NormalizedPath};

/// Result of exporting one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub slug: String,
    pub path: NormalizedPath,
    /// `false` when the file already held identical text and was left alone
    pub written: bool,
}

/// Writes stored records to their pattern files.
pub struct PatternExporter<'a> {
    records: &'a dyn RecordStore,
    files: &'a dyn FileStore,
    directory: &'a PatternDirectory,
    skip_unchanged: bool,
}

impl<'a> PatternExporter<'a> {
    pub fn new(
        records: &'a dyn RecordStore,
        files: &'a dyn FileStore,
        directory: &'a PatternDirectory,
    ) -> Self {
        Self {
            records,
            files,
            directory,
            skip_unchanged: false,
        }
    }

    /// Compare checksums and leave files whose text would not change.
    pub fn skip_unchanged(mut self, skip: bool) -> Self {
        self.skip_unchanged = skip;
        self
    }

    /// Export one record to `{dir}/{slug}.{extension}`.
    ///
    /// # Errors
    /// [`Error::PatternNotFound`] for an unknown id; a filesystem error when
    /// the directory cannot be created or the write fails. A failed write
    /// leaves any previous file untouched.
    pub fn export(&self, id: PatternId) -> Result<ExportOutcome> {
        let stored = self
            .records
            .get(id)?
            .ok_or_else(|| Error::PatternNotFound(id.to_string()))?;
        self.write(&stored)
    }

    /// Export every stored record, stopping at the first failure.
    pub fn export_all(&self) -> Result<Vec<ExportOutcome>> {
        self.records
            .list(&RecordFilter::default())?
            .iter()
            .map(|stored| self.write(stored))
            .collect()
    }

    fn write(&self, stored: &StoredPattern) -> Result<ExportOutcome> {
        let slug = stored.name();
        let path = self.directory.path_for(&slug);
        let text = pattern_format::serialize(&stored.record);

        self.files.ensure_dir(self.directory.dir())?;

        if self.skip_unchanged
            && self.files.exists(&path)
            && let Ok(existing) = self.files.read_text(&path)
            && compute_content_checksum(&existing) == compute_content_checksum(&text)
        {
            tracing::debug!(%path, "Pattern file unchanged, skipping write");
            return Ok(ExportOutcome {
                slug,
                path,
                written: false,
            });
        }

        self.files.write_text(&path, &text)?;
        tracing::info!(id = %stored.id, %path, "Exported pattern");
        Ok(ExportOutcome {
            slug,
            path,
            written: true,
        })
    }
}
