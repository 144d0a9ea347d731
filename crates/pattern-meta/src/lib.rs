//! Pattern schema and configuration for Pattern Studio.
//!
//! This crate defines [`PatternRecord`], the rules a record must satisfy to
//! survive a trip through a pattern file, slug derivation, and the
//! configuration types read from `.patterns/config.toml`.

pub mod config;
pub mod error;
pub mod record;
pub mod slug;

pub use config::{
    CoreConfig, ImportConfig, Mode, PatternsConfig, QueryConfig, StudioConfig,
    current_environment, is_development_environment,
};
pub use error::{Error, Result};
pub use record::{DEFAULT_INSERTER, DEFAULT_VIEWPORT_WIDTH, PatternRecord, ordered_set};
pub use slug::slugify;
