//! Error types for pattern-format

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The text does not start with `<?php` followed by a `/** ... */` block.
    #[error("No pattern header found")]
    NoHeader,
}
