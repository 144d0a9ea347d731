//! Filesystem abstraction for Pattern Studio
//!
//! Provides normalized paths, atomic I/O, and the [`FileStore`] seam the
//! import/export pipeline reads and writes pattern files through.

pub mod checksum;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;
pub mod store;

pub use config::ConfigStore;
pub use constants::StudioPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use store::{FileStore, LocalFileStore};
