//! Init command implementation
//!
//! Creates `.patterns/config.toml` and the pattern directory.

use std::path::Path;

use colored::Colorize;
use pattern_fs::{ConfigStore, FileStore, LocalFileStore, NormalizedPath, StudioPath};
use pattern_meta::{CoreConfig, Mode, PatternsConfig, StudioConfig};

use crate::error::{CliError, Result};

/// Run the init command
pub fn run_init(path: &Path, mode: Option<Mode>, directory: &str, force: bool) -> Result<()> {
    let shown_mode = mode.unwrap_or_else(Mode::from_environment);
    println!(
        "{} Initializing Pattern Studio in {} mode...",
        "=>".blue().bold(),
        shown_mode.to_string().cyan()
    );

    let root = NormalizedPath::new(path);
    init_project(&root, mode, directory, force)?;

    println!("   Config: {}", StudioPath::ConfigFile.as_str().yellow());
    println!("   Patterns: {}", directory.yellow());
    println!("{} Project initialized!", "OK".green().bold());
    Ok(())
}

/// Write the project config and create the pattern directory.
///
/// An explicit `mode` is stored in the config; without one the mode keeps
/// following `PATTERN_STUDIO_ENV`.
pub fn init_project(
    root: &NormalizedPath,
    mode: Option<Mode>,
    directory: &str,
    force: bool,
) -> Result<()> {
    let config_path = root.join(StudioPath::ConfigFile.as_str());
    if config_path.exists() && !force {
        return Err(CliError::user(format!(
            "{} already exists. Use --force to overwrite it.",
            StudioPath::ConfigFile
        )));
    }

    let config = StudioConfig {
        core: CoreConfig { mode },
        patterns: PatternsConfig {
            directory: directory.to_string(),
            ..PatternsConfig::default()
        },
        ..StudioConfig::default()
    };
    config.validate()?;

    let files = LocalFileStore::new();
    files.ensure_dir(&root.join(StudioPath::StateDir.as_str()))?;
    ConfigStore::new().save(&config_path, &config)?;
    files.ensure_dir(&root.join(directory))?;

    tracing::debug!(%config_path, "Wrote project config");
    Ok(())
}
