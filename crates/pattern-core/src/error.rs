//! Error types for pattern-core

use std::path::PathBuf;

/// Result type for pattern-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pattern-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No stored record matches the id or slug
    #[error("Pattern not found: {0}")]
    PatternNotFound(String),

    /// The record store refused a create or update
    #[error("{reason}")]
    UpsertRejected { reason: String },

    /// The query surface only exists in api mode
    #[error("Pattern queries are disabled in file mode")]
    QueryDisabled,

    /// The record store file exists but cannot be read as a record set
    #[error("Record store at {path} is unreadable: {message}")]
    StoreCorrupt { path: PathBuf, message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from pattern-fs
    #[error(transparent)]
    Fs(#[from] pattern_fs::Error),

    /// Schema or config error from pattern-meta
    #[error(transparent)]
    Meta(#[from] pattern_meta::Error),

    /// Pattern file parse error from pattern-format
    #[error(transparent)]
    Format(#[from] pattern_format::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}
