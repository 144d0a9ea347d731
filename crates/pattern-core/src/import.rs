//! File to record import

use crate::directory::PatternDirectory;
use crate::export::PatternExporter;
use crate::store::{PatternId, RecordStore};
use crate::Result;
use pattern_fs::{FileStore, NormalizedPath};
use pattern_meta::PatternRecord;
use serde::Serialize;

/// A pattern file found in the pattern directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: NormalizedPath,
    /// The file's base name
    pub slug: String,
    /// Whether a record with that slug is already stored
    pub imported: bool,
}

/// Outcome of a batch import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Titles of imported patterns, in file order
    pub success: Vec<String>,
    /// One message per failed file, in file order
    pub errors: Vec<String>,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Human-readable summary: the success count, then one line per error.
    pub fn summary(&self) -> String {
        let mut out = format!("Successfully imported {} patterns", self.success.len());
        if !self.errors.is_empty() {
            out.push_str("\nSome patterns failed to import:\n");
            out.push_str(&self.errors.join("\n"));
        }
        out
    }
}

/// Reads pattern files into the record store.
///
/// With `rewrite_files` set, every imported record is exported again so the
/// file on disk is in canonical form.
pub struct PatternImporter<'a> {
    records: &'a mut dyn RecordStore,
    files: &'a dyn FileStore,
    directory: &'a PatternDirectory,
    rewrite_files: bool,
    skip_unchanged: bool,
}

impl<'a> PatternImporter<'a> {
    pub fn new(
        records: &'a mut dyn RecordStore,
        files: &'a dyn FileStore,
        directory: &'a PatternDirectory,
    ) -> Self {
        Self {
            records,
            files,
            directory,
            rewrite_files: true,
            skip_unchanged: false,
        }
    }

    pub fn rewrite_files(mut self, rewrite: bool) -> Self {
        self.rewrite_files = rewrite;
        self
    }

    pub fn skip_unchanged(mut self, skip: bool) -> Self {
        self.skip_unchanged = skip;
        self
    }

    /// List pattern files (non-recursive, sorted) with their import status.
    pub fn discover(&self) -> Result<Vec<CandidateFile>> {
        let paths = self
            .files
            .list_files(self.directory.dir(), self.directory.extension())?;

        let mut candidates = Vec::with_capacity(paths.len());
        for path in paths {
            let slug = self.directory.slug_of(&path).unwrap_or_default().to_string();
            let imported = self.records.find_by_slug(&slug)?.is_some();
            candidates.push(CandidateFile {
                path,
                slug,
                imported,
            });
        }
        Ok(candidates)
    }

    /// Import each file in order. A failing file is reported and skipped;
    /// it never stops the batch.
    pub fn import(&mut self, paths: &[NormalizedPath]) -> ImportReport {
        let mut report = ImportReport::default();
        for path in paths {
            match self.import_file(path) {
                Ok(title) => report.success.push(title),
                Err(message) => {
                    tracing::warn!(%path, %message, "Pattern import failed");
                    report.errors.push(message);
                }
            }
        }
        tracing::info!(
            imported = report.success.len(),
            failed = report.errors.len(),
            "Pattern import finished"
        );
        report
    }

    fn import_file(&mut self, path: &NormalizedPath) -> std::result::Result<String, String> {
        let file = path.file_name().unwrap_or(path.as_str());

        let record = self
            .files
            .read_text(path)
            .map_err(|e| e.to_string())
            .and_then(|text| pattern_format::deserialize(&text).map_err(|e| e.to_string()))
            .map_err(|reason| {
                tracing::debug!(%path, %reason, "Unreadable pattern file");
                format!("Could not parse pattern file: {file}")
            })?;

        let title = record.title.clone();
        let id = self
            .upsert_by_slug(record)
            .map_err(|e| format!("Failed to create pattern {title}: {e}"))?;

        if self.rewrite_files {
            PatternExporter::new(&*self.records, self.files, self.directory)
                .skip_unchanged(self.skip_unchanged)
                .export(id)
                .map_err(|e| format!("Error importing {file}: {e}"))?;
        }

        Ok(title)
    }

    fn upsert_by_slug(&mut self, record: PatternRecord) -> Result<PatternId> {
        let existing = self.records.find_by_slug(&record.slug())?.map(|p| p.id);
        self.records.upsert(existing, record)
    }
}
