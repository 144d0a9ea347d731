//! Export command implementation

use std::path::Path;

use colored::Colorize;
use pattern_core::ExportOutcome;

use crate::context::open_studio;
use crate::error::Result;

/// Export the named patterns, or every pattern when `slugs` is empty.
pub fn run_export(cwd: &Path, slugs: &[String]) -> Result<()> {
    let studio = open_studio(cwd)?;

    let outcomes = if slugs.is_empty() {
        studio.export_all()?
    } else {
        slugs
            .iter()
            .map(|slug| studio.export_slug(slug))
            .collect::<pattern_core::Result<Vec<_>>>()?
    };

    for outcome in &outcomes {
        print_outcome(outcome);
    }
    println!(
        "{} Exported {} pattern(s) to {}",
        "OK".green().bold(),
        outcomes.len(),
        studio.directory().dir()
    );
    Ok(())
}

fn print_outcome(outcome: &ExportOutcome) {
    if outcome.written {
        println!("  {} {}", "+".green(), outcome.path);
    } else {
        println!("  {} {} (unchanged)", "=".dimmed(), outcome.path);
    }
}
