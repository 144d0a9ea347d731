//! Configuration types for Pattern Studio
//!
//! These types describe `.patterns/config.toml` and its layers. Loading and
//! merging the layers lives in `pattern-core`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Environment variable naming the deployment environment.
pub const ENVIRONMENT_VAR: &str = "PATTERN_STUDIO_ENV";

/// Storage authority for patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Pattern files on disk are authoritative. Saving a record rewrites its
    /// file and the query surface is disabled.
    File,

    /// The record store is authoritative. Files are only written on an
    /// explicit export and the query surface is served.
    Api,
}

/// Value of `PATTERN_STUDIO_ENV`, if set.
pub fn current_environment() -> Option<String> {
    std::env::var(ENVIRONMENT_VAR).ok()
}

/// Whether a deployment environment name is a development one.
///
/// Only `development` and `local` qualify. An unset or empty environment is
/// production.
pub fn is_development_environment(environment: Option<&str>) -> bool {
    matches!(
        environment.map(|env| env.trim().to_lowercase()).as_deref(),
        Some("development") | Some("local")
    )
}

impl Mode {
    /// Mode implied by a deployment environment name.
    ///
    /// Development environments select [`Mode::File`]; anything else,
    /// including an unset environment, selects [`Mode::Api`].
    pub fn for_environment(environment: Option<&str>) -> Self {
        if is_development_environment(environment) {
            Mode::File
        } else {
            Mode::Api
        }
    }

    /// Mode implied by the `PATTERN_STUDIO_ENV` variable.
    pub fn from_environment() -> Self {
        let environment = current_environment();
        let mode = Self::for_environment(environment.as_deref());
        tracing::debug!(?environment, %mode, "Mode derived from environment");
        mode
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Mode::File)
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" | "files" => Ok(Mode::File),
            "api" | "database" | "db" => Ok(Mode::Api),
            _ => Err(Error::InvalidMode {
                mode: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::File => write!(f, "file"),
            Mode::Api => write!(f, "api"),
        }
    }
}

/// Core settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Explicit mode. When unset the environment decides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
}

/// Where pattern files live, relative to the project root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternsConfig {
    #[serde(default = "default_directory")]
    pub directory: String,
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_directory() -> String {
    "patterns".to_string()
}

fn default_extension() -> String {
    "php".to_string()
}

impl Default for PatternsConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            extension: default_extension(),
        }
    }
}

/// Import behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Import every pattern file once when the store is first found empty.
    #[serde(default = "default_true")]
    pub auto_import: bool,
    /// Leave a pattern file alone when its serialized form is unchanged.
    #[serde(default)]
    pub skip_unchanged: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            auto_import: true,
            skip_unchanged: false,
        }
    }
}

/// Query surface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

fn default_per_page() -> usize {
    100
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
        }
    }
}

/// Complete Pattern Studio configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StudioConfig {
    #[serde(default)]
    pub core: CoreConfig,
    #[serde(default)]
    pub patterns: PatternsConfig,
    #[serde(default)]
    pub import: ImportConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

impl StudioConfig {
    /// The configured mode, falling back to the environment.
    pub fn mode(&self) -> Mode {
        self.core.mode.unwrap_or_else(Mode::from_environment)
    }

    /// The configured mode, falling back to the given environment name.
    pub fn mode_in(&self, environment: Option<&str>) -> Mode {
        self.core
            .mode
            .unwrap_or_else(|| Mode::for_environment(environment))
    }

    /// Reject values that would make the pipeline misbehave.
    pub fn validate(&self) -> crate::Result<()> {
        let directory = self.patterns.directory.trim();
        if directory.is_empty() {
            return Err(Error::InvalidConfig {
                message: "patterns.directory must not be empty".into(),
            });
        }
        let extension = &self.patterns.extension;
        if extension.is_empty() || extension.starts_with('.') || extension.contains('/') {
            return Err(Error::InvalidConfig {
                message: format!("patterns.extension '{extension}' must be a bare extension"),
            });
        }
        if self.query.per_page == 0 {
            return Err(Error::InvalidConfig {
                message: "query.per_page must be at least 1".into(),
            });
        }
        Ok(())
    }
}
