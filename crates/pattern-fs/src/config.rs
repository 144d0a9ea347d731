//! TOML configuration files
//!
//! Studio configuration lives in `.toml` files: the project config, its
//! local overrides and the global defaults. [`ConfigStore`] reads them for
//! the resolver and writes the project config for `init`.

use crate::{Error, NormalizedPath, Result, io};
use serde::{Serialize, de::DeserializeOwned};

const EXTENSION: &str = "toml";

/// Reads and writes `.toml` configuration files. Saves are atomic.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Parse the TOML file at `path` into `T`.
    ///
    /// Deserializing into [`toml::Table`] keeps a layer unvalidated so it can
    /// be merged before the final conversion.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        check_extension(path)?;
        let content = io::read_text(path)?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_native(),
            message: e.to_string(),
        })
    }

    /// Write `value` as pretty TOML to `path`.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        check_extension(path)?;
        let content = toml::to_string_pretty(value).map_err(|e| Error::ConfigSerialize {
            path: path.to_native(),
            message: e.to_string(),
        })?;
        io::write_text(path, &content)
    }
}

fn check_extension(path: &NormalizedPath) -> Result<()> {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case(EXTENSION) => Ok(()),
        other => Err(Error::UnsupportedFormat {
            extension: other.unwrap_or_default().to_string(),
        }),
    }
}
