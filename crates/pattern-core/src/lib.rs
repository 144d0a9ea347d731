//! Core orchestration for Pattern Studio.
//!
//! This crate connects the pattern file format to storage:
//!
//! - [`store`]: the [`RecordStore`] trait with in-memory and JSON backends
//! - [`PatternExporter`]: record → pattern file
//! - [`PatternImporter`]: pattern files → records, with per-file reporting
//! - [`query`]: paged, filtered reads for api mode
//! - [`PatternStudio`]: the facade that applies the file/api mode rules
//! - [`config`]: layered configuration resolution

pub mod config;
pub mod directory;
pub mod error;
pub mod export;
pub mod import;
pub mod query;
pub mod store;
pub mod studio;

pub use config::ConfigResolver;
pub use directory::PatternDirectory;
pub use error::{Error, Result};
pub use export::{ExportOutcome, PatternExporter};
pub use import::{CandidateFile, ImportReport, PatternImporter};
pub use query::{PatternQuery, PatternResponse, QueryPage, run_query};
pub use store::{
    InMemoryRecordStore, JsonRecordStore, PatternId, RecordFilter, RecordStore, StoredPattern,
};
pub use studio::PatternStudio;
