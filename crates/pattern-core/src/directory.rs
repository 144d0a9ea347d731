//! Location of pattern files

use pattern_fs::NormalizedPath;
use pattern_meta::PatternsConfig;

/// The directory pattern files are read from and written to, and the
/// extension that marks them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternDirectory {
    dir: NormalizedPath,
    extension: String,
}

impl PatternDirectory {
    pub fn new(dir: NormalizedPath, extension: impl Into<String>) -> Self {
        Self {
            dir,
            extension: extension.into(),
        }
    }

    /// Resolve the configured directory against a project root.
    pub fn from_config(root: &NormalizedPath, config: &PatternsConfig) -> Self {
        Self::new(root.join(&config.directory), config.extension.clone())
    }

    pub fn dir(&self) -> &NormalizedPath {
        &self.dir
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// `{dir}/{slug}.{extension}`
    pub fn path_for(&self, slug: &str) -> NormalizedPath {
        self.dir.join(&format!("{}.{}", slug, self.extension))
    }

    /// The slug a file in this directory stands for: its base name.
    pub fn slug_of<'a>(&self, path: &'a NormalizedPath) -> Option<&'a str> {
        path.file_stem()
    }
}
