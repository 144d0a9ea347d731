//! Project root detection
//!
//! Commands work from anywhere inside a project: the root is the nearest
//! ancestor that contains a `.patterns/` directory.

use std::path::{Path, PathBuf};

use colored::Colorize;
use pattern_core::PatternStudio;
use pattern_fs::{NormalizedPath, StudioPath};

use crate::error::{CliError, Result};

/// Walk up from `start` to the nearest directory containing `.patterns/`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(StudioPath::StateDir).is_dir())
        .map(Path::to_path_buf)
}

/// Like [`find_project_root`], but a missing project is a user error.
pub fn require_project_root(start: &Path) -> Result<NormalizedPath> {
    find_project_root(start).map(NormalizedPath::new).ok_or_else(|| {
        CliError::user(format!(
            "Not a Pattern Studio project (no {} directory found). Run `patterns init` first.",
            StudioPath::StateDir
        ))
    })
}

/// Open the studio for the project containing `cwd` and run the one-shot
/// auto-import.
pub fn open_studio(cwd: &Path) -> Result<PatternStudio> {
    let root = require_project_root(cwd)?;
    tracing::debug!(%root, "Found project root");

    let mut studio = PatternStudio::open(root)?;
    if let Some(report) = studio.maybe_auto_import()? {
        println!(
            "{} Auto-imported {} pattern file(s) from {}",
            "=>".blue().bold(),
            report.success.len(),
            studio.directory().dir()
        );
        for error in &report.errors {
            println!("   {} {}", "WARN".yellow().bold(), error);
        }
    }
    Ok(studio)
}

/// Resolve a user-supplied path against the working directory.
pub fn resolve_path(cwd: &Path, path: &Path) -> NormalizedPath {
    if path.is_absolute() {
        NormalizedPath::new(path)
    } else {
        NormalizedPath::new(cwd.join(path))
    }
}
