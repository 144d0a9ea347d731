//! Add command implementation

use std::fs;
use std::path::Path;

use colored::Colorize;
use pattern_meta::PatternRecord;

use crate::cli::AddArgs;
use crate::context::{open_studio, resolve_path};
use crate::error::Result;

/// Run the add command
pub fn run_add(cwd: &Path, args: AddArgs) -> Result<()> {
    let mut studio = open_studio(cwd)?;
    let record = build_record(cwd, args)?;
    let slug = record.slug();
    let existed = studio.get_by_slug(&slug).is_ok();

    let stored = studio.save_by_slug(record)?;

    let verb = if existed { "Updated" } else { "Created" };
    println!(
        "{} {} pattern {} ({})",
        "OK".green().bold(),
        verb,
        stored.record.title.cyan(),
        stored.name().dimmed()
    );
    if studio.mode().is_file() {
        println!(
            "   Wrote {}",
            studio.directory().path_for(&stored.name()).to_string().yellow()
        );
    }
    Ok(())
}

fn build_record(cwd: &Path, args: AddArgs) -> Result<PatternRecord> {
    let content = match (args.content, args.content_file) {
        (Some(content), _) => content,
        (None, Some(file)) => {
            let path = resolve_path(cwd, &file).to_native();
            fs::read_to_string(&path).map_err(|e| pattern_fs::Error::io(path, e))?
        }
        (None, None) => String::new(),
    };

    let mut record = PatternRecord::new(args.title)
        .with_description(args.description.unwrap_or_default())
        .with_categories(args.categories)
        .with_keywords(args.keywords)
        .with_block_types(args.block_types)
        .with_post_types(args.post_types)
        .with_template_types(args.template_types)
        .with_inserter(!args.hidden)
        .with_content(content);
    if let Some(width) = args.viewport_width {
        record = record.with_viewport_width(width);
    }
    Ok(record)
}
