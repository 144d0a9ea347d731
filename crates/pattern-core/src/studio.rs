//! The Pattern Studio facade
//!
//! Ties a record store, a file store and the resolved configuration
//! together and applies the mode rules:
//!
//! - **file mode**: every save rewrites the pattern file, imports rewrite
//!   files in canonical form, and the query surface is off.
//! - **api mode**: saves and imports only touch the record store; the query
//!   surface is on.
//!
//! Explicit exports work in both modes. The one-shot auto-import runs only
//! in file mode inside a development environment (`PATTERN_STUDIO_ENV` set
//! to `development` or `local`).

use crate::config::ConfigResolver;
use crate::directory::PatternDirectory;
use crate::export::{ExportOutcome, PatternExporter};
use crate::import::{CandidateFile, ImportReport, PatternImporter};
use crate::query::{PatternQuery, QueryPage, run_query};
use crate::store::{JsonRecordStore, PatternId, RecordFilter, RecordStore, StoredPattern};
use crate::{Error, Result};
use chrono::Utc;
use pattern_fs::{FileStore, LocalFileStore, NormalizedPath, StudioPath};
use pattern_meta::{
    Mode, PatternRecord, StudioConfig, current_environment, is_development_environment,
};

/// Entry point for every pattern operation in a project.
pub struct PatternStudio<R = JsonRecordStore, F = LocalFileStore> {
    root: NormalizedPath,
    config: StudioConfig,
    mode: Mode,
    environment: Option<String>,
    directory: PatternDirectory,
    records: R,
    files: F,
}

impl PatternStudio {
    /// Open the project at `root` with its resolved configuration, the JSON
    /// record store and the local filesystem.
    pub fn open(root: NormalizedPath) -> Result<Self> {
        let config = ConfigResolver::new(root.clone()).resolve()?;
        let records = JsonRecordStore::at_root(&root);
        Ok(Self::new(root, config, records, LocalFileStore::new()))
    }
}

impl<R: RecordStore, F: FileStore> PatternStudio<R, F> {
    /// Build a studio. The environment is read from `PATTERN_STUDIO_ENV`.
    pub fn new(root: NormalizedPath, config: StudioConfig, records: R, files: F) -> Self {
        let environment = current_environment();
        let mode = config.mode_in(environment.as_deref());
        let directory = PatternDirectory::from_config(&root, &config.patterns);
        tracing::debug!(%root, %mode, dir = %directory.dir(), "Pattern studio ready");
        Self {
            root,
            config,
            mode,
            environment,
            directory,
            records,
            files,
        }
    }

    /// Replace the deployment environment read at construction. An unset
    /// configured mode is derived again from `environment`.
    pub fn with_environment(mut self, environment: Option<&str>) -> Self {
        self.environment = environment.map(str::to_string);
        self.mode = self.config.mode_in(environment);
        self
    }

    /// Whether the deployment environment is a development one.
    pub fn is_development(&self) -> bool {
        is_development_environment(self.environment.as_deref())
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn directory(&self) -> &PatternDirectory {
        &self.directory
    }

    pub fn records(&self) -> &R {
        &self.records
    }

    pub fn files(&self) -> &F {
        &self.files
    }

    /// Create (`id == None`) or update a record. In file mode the pattern
    /// file is rewritten afterwards.
    pub fn save(&mut self, id: Option<PatternId>, record: PatternRecord) -> Result<StoredPattern> {
        let id = self.records.upsert(id, record)?;
        self.on_saved(id)?;
        self.get(id)
    }

    /// Create or update the record whose slug matches `record`'s title.
    pub fn save_by_slug(&mut self, record: PatternRecord) -> Result<StoredPattern> {
        let existing = self.records.find_by_slug(&record.slug())?.map(|p| p.id);
        self.save(existing, record)
    }

    fn on_saved(&self, id: PatternId) -> Result<()> {
        if self.mode.is_file() {
            self.exporter().export(id)?;
        } else {
            tracing::debug!(%id, "Api mode, pattern file left untouched");
        }
        Ok(())
    }

    pub fn get(&self, id: PatternId) -> Result<StoredPattern> {
        self.records
            .get(id)?
            .ok_or_else(|| Error::PatternNotFound(id.to_string()))
    }

    pub fn get_by_slug(&self, slug: &str) -> Result<StoredPattern> {
        self.records
            .find_by_slug(slug)?
            .ok_or_else(|| Error::PatternNotFound(slug.to_string()))
    }

    /// All stored records in id order.
    pub fn list(&self) -> Result<Vec<StoredPattern>> {
        self.records.list(&RecordFilter::default())
    }

    pub fn export(&self, id: PatternId) -> Result<ExportOutcome> {
        self.exporter().export(id)
    }

    pub fn export_slug(&self, slug: &str) -> Result<ExportOutcome> {
        let id = self.get_by_slug(slug)?.id;
        self.export(id)
    }

    pub fn export_all(&self) -> Result<Vec<ExportOutcome>> {
        self.exporter().export_all()
    }

    /// Pattern files in the pattern directory with their import status.
    pub fn discover(&mut self) -> Result<Vec<CandidateFile>> {
        self.importer().discover()
    }

    pub fn import(&mut self, paths: &[NormalizedPath]) -> ImportReport {
        self.importer().import(paths)
    }

    /// Import every discovered pattern file.
    pub fn import_all(&mut self) -> Result<ImportReport> {
        let paths: Vec<NormalizedPath> = self.discover()?.into_iter().map(|c| c.path).collect();
        Ok(self.import(&paths))
    }

    /// One-shot import of the theme's pattern files into an empty store.
    ///
    /// Runs only in file mode inside a development environment with
    /// `import.auto_import` enabled, and only until the marker
    /// `.patterns/auto-imported` exists. A store that already holds
    /// records just gets the marker. Returns the report when an import ran.
    pub fn maybe_auto_import(&mut self) -> Result<Option<ImportReport>> {
        if !self.mode.is_file() || !self.is_development() || !self.config.import.auto_import {
            return Ok(None);
        }

        let marker = self.root.join(StudioPath::AutoImportMarker.as_str());
        if self.files.exists(&marker) {
            return Ok(None);
        }

        if !self.records.is_empty()? {
            tracing::debug!("Store already populated, marking auto-import done");
            self.write_marker(&marker)?;
            return Ok(None);
        }

        let candidates = self.discover()?;
        if candidates.is_empty() {
            return Ok(None);
        }

        let paths: Vec<NormalizedPath> = candidates.into_iter().map(|c| c.path).collect();
        let report = self.import(&paths);
        self.write_marker(&marker)?;
        tracing::info!(imported = report.success.len(), "Auto-imported theme patterns");
        Ok(Some(report))
    }

    fn write_marker(&self, marker: &NormalizedPath) -> Result<()> {
        if let Some(parent) = marker.parent() {
            self.files.ensure_dir(&parent)?;
        }
        self.files.write_text(marker, &Utc::now().to_rfc3339())?;
        Ok(())
    }

    /// Serve a query. Only available in api mode.
    pub fn query(&self, query: &PatternQuery) -> Result<QueryPage> {
        if self.mode.is_file() {
            return Err(Error::QueryDisabled);
        }
        run_query(&self.records, query, self.config.query.per_page)
    }

    fn exporter(&self) -> PatternExporter<'_> {
        PatternExporter::new(&self.records, &self.files, &self.directory)
            .skip_unchanged(self.config.import.skip_unchanged)
    }

    fn importer(&mut self) -> PatternImporter<'_> {
        PatternImporter::new(&mut self.records, &self.files, &self.directory)
            .rewrite_files(self.mode.is_file())
            .skip_unchanged(self.config.import.skip_unchanged)
    }
}
