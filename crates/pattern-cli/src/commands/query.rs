//! Query command implementation

use std::path::Path;

use pattern_core::PatternQuery;

use crate::context::open_studio;
use crate::error::Result;

/// Print a page of query results as JSON.
pub fn run_query(cwd: &Path, query: PatternQuery) -> Result<()> {
    let studio = open_studio(cwd)?;
    let page = studio.query(&query)?;
    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}
