//! Error types for pattern-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from pattern-core
    #[error(transparent)]
    Core(#[from] pattern_core::Error),

    /// Error from pattern-fs
    #[error(transparent)]
    Fs(#[from] pattern_fs::Error),

    /// Error from pattern-meta
    #[error(transparent)]
    Meta(#[from] pattern_meta::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
