//! Error types for pattern-meta

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid pattern {field}: {message}")]
    InvalidRecord {
        field: &'static str,
        message: String,
    },

    #[error("Invalid mode: {mode}")]
    InvalidMode { mode: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl Error {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            field,
            message: message.into(),
        }
    }
}
