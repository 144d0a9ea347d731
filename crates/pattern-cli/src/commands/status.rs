//! Status command implementation

use std::path::Path;

use colored::Colorize;
use pattern_fs::StudioPath;

use crate::context::open_studio;
use crate::error::Result;

/// Run the status command
pub fn run_status(cwd: &Path) -> Result<()> {
    let mut studio = open_studio(cwd)?;
    let stored = studio.list()?.len();
    let candidates = studio.discover()?;

    println!("{}", "Pattern Studio Status".bold());
    println!();
    println!("{}:     {}", "Root".dimmed(), studio.root());
    println!("{}:     {}", "Mode".dimmed(), studio.mode().to_string().cyan());
    println!("{}:   {}", "Config".dimmed(), StudioPath::ConfigFile);
    println!("{}: {}", "Patterns".dimmed(), studio.directory().dir());
    println!("{}:  {}", "Records".dimmed(), stored);
    println!();

    println!("{}:", "Pattern Files".bold());
    if candidates.is_empty() {
        println!(
            "  {} (use {} to create one)",
            "None".dimmed(),
            "patterns add".cyan()
        );
    }
    for candidate in &candidates {
        let name = candidate
            .path
            .file_name()
            .unwrap_or(candidate.path.as_str())
            .to_string();
        let status = if candidate.imported {
            "imported".green()
        } else {
            "not imported".yellow()
        };
        println!("  {} ({})", name.cyan(), status);
    }

    Ok(())
}
