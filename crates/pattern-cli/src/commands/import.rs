//! Import command implementation

use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::context::{open_studio, resolve_path};
use crate::error::{CliError, Result};

/// Import the given files, or every discovered file with `all`.
pub fn run_import(cwd: &Path, files: &[PathBuf], all: bool) -> Result<()> {
    if files.is_empty() && !all {
        return Err(CliError::user(
            "No files given. Pass pattern files or use --all.",
        ));
    }

    let mut studio = open_studio(cwd)?;
    let report = if all {
        studio.import_all()?
    } else {
        let paths: Vec<_> = files.iter().map(|f| resolve_path(cwd, f)).collect();
        studio.import(&paths)
    };

    for title in &report.success {
        println!("  {} {}", "+".green(), title);
    }
    for error in &report.errors {
        println!("  {} {}", "WARN".yellow().bold(), error);
    }

    if report.is_clean() {
        println!(
            "{} Successfully imported {} patterns",
            "OK".green().bold(),
            report.success.len()
        );
        Ok(())
    } else {
        Err(CliError::user(report.summary()))
    }
}
