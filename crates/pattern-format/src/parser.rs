//! Pattern file parser
//!
//! Reads the `/** ... */` header that follows `<?php` into a
//! [`PatternRecord`]. Unknown keys are ignored and missing fields keep their
//! defaults. The `Slug` line is never trusted: the slug is re-derived from
//! the title.

use pattern_meta::PatternRecord;
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::header::HeaderField;
use crate::writer::CLOSE_TAG;

/// Matches the opening tag and the first doc comment. Group 1 is the
/// comment body.
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A<\?php\s*/\*\*(.*?)\*/").expect("Invalid header regex")
});

/// Parse the text of a pattern file.
///
/// Content is everything after the first `?>` that follows the header, minus
/// the single line break the writer puts there. A file without `?>` has
/// empty content.
///
/// # Errors
/// [`Error::NoHeader`] when the text does not open with `<?php` and a doc
/// comment.
pub fn deserialize(text: &str) -> Result<PatternRecord> {
    let captures = HEADER_REGEX.captures(text).ok_or(Error::NoHeader)?;
    let (Some(whole), Some(header)) = (captures.get(0), captures.get(1)) else {
        return Err(Error::NoHeader);
    };

    let mut record = PatternRecord::default();

    for line in header.as_str().split('\n') {
        let line = line.trim_matches(|c| c == ' ' || c == '\t' || c == '*');
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        match HeaderField::from_key(key.trim()) {
            Some(field) => field.apply(&mut record, value.trim()),
            None => tracing::trace!(key = key.trim(), "Ignoring unknown header key"),
        }
    }

    record.content = extract_content(&text[whole.end()..]);
    Ok(record)
}

fn extract_content(rest: &str) -> String {
    let Some(idx) = rest.find(CLOSE_TAG) else {
        return String::new();
    };
    let after = &rest[idx + CLOSE_TAG.len()..];
    after
        .strip_prefix("\r\n")
        .or_else(|| after.strip_prefix('\n'))
        .unwrap_or(after)
        .to_string()
}
