//! Well-known paths inside a Pattern Studio project.

use std::path::Path;

/// Standard project filesystem markers and paths, relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudioPath {
    /// The `.patterns` directory (studio state root)
    StateDir,
    /// `.patterns/config.toml`
    ConfigFile,
    /// `.patterns/config.local.toml` (machine-local overrides)
    LocalConfigFile,
    /// `.patterns/records.json` (record store)
    RecordsFile,
    /// `.patterns/auto-imported` (one-shot auto-import marker)
    AutoImportMarker,
}

impl StudioPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StateDir => ".patterns",
            Self::ConfigFile => ".patterns/config.toml",
            Self::LocalConfigFile => ".patterns/config.local.toml",
            Self::RecordsFile => ".patterns/records.json",
            Self::AutoImportMarker => ".patterns/auto-imported",
        }
    }
}

impl AsRef<Path> for StudioPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for StudioPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for StudioPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
