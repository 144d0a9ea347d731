//! List command implementation

use std::path::Path;

use colored::Colorize;

use crate::context::open_studio;
use crate::error::Result;

/// Print stored patterns as a table.
pub fn run_list(cwd: &Path) -> Result<()> {
    let studio = open_studio(cwd)?;
    let patterns = studio.list()?;

    if patterns.is_empty() {
        println!(
            "{} (use {} or {})",
            "No patterns stored".dimmed(),
            "patterns add".cyan(),
            "patterns import --all".cyan()
        );
        return Ok(());
    }

    let slug_width = patterns
        .iter()
        .map(|p| p.name().len())
        .max()
        .unwrap_or(0)
        .max(4);

    println!(
        "{}",
        format!("{:>4}  {:<slug_width$}  {}", "ID", "SLUG", "TITLE").bold()
    );
    for pattern in &patterns {
        let mut line = format!(
            "{:>4}  {:<slug_width$}  {}",
            pattern.id.to_string(),
            pattern.name(),
            pattern.record.title
        );
        if !pattern.record.categories.is_empty() {
            line.push_str(&format!(" [{}]", pattern.record.categories.join(", ")));
        }
        if !pattern.record.inserter {
            line.push_str(" (hidden)");
        }
        println!("{line}");
    }
    Ok(())
}
