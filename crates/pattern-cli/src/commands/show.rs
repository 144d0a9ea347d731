//! Show command implementation

use std::path::Path;

use crate::context::open_studio;
use crate::error::Result;

/// Print the canonical pattern file text for `slug`.
pub fn run_show(cwd: &Path, slug: &str) -> Result<()> {
    let studio = open_studio(cwd)?;
    let stored = studio.get_by_slug(slug)?;
    print!("{}", pattern_format::serialize(&stored.record));
    if !stored.record.content.ends_with('\n') {
        println!();
    }
    Ok(())
}
