//! Pattern file writer
//!
//! Produces the canonical file form:
//! ```text
//! <?php
//! /**
//!  * Title: Hero Banner
//!  * Slug: hero-banner
//!  * Viewport Width: 1280
//!  * Inserter: true
//!  */
//!
//! ?>
//! <!-- wp:cover /-->
//! ```

use pattern_meta::PatternRecord;

use crate::header::HeaderField;

pub(crate) const OPEN_TAG: &str = "<?php";
pub(crate) const CLOSE_TAG: &str = "?>";

/// Render a record as the text of a pattern file.
///
/// Optional fields are omitted when empty. Viewport width and inserter are
/// always written. Content follows the closing tag verbatim.
///
/// # Example
/// ```
/// use pattern_format::serialize;
/// use pattern_meta::PatternRecord;
///
/// let text = serialize(&PatternRecord::new("Hero").with_content("<p>Hi</p>"));
/// assert!(text.starts_with("<?php\n/**\n * Title: Hero\n * Slug: hero\n"));
/// assert!(text.ends_with("?>\n<p>Hi</p>"));
/// ```
pub fn serialize(record: &PatternRecord) -> String {
    let mut out = String::with_capacity(256 + record.content.len());
    out.push_str(OPEN_TAG);
    out.push_str("\n/**\n");

    for field in HeaderField::ORDER {
        if let Some(value) = field.render(record) {
            out.push_str(" * ");
            out.push_str(field.label());
            out.push_str(": ");
            out.push_str(&value);
            out.push('\n');
        }
    }

    out.push_str(" */\n\n");
    out.push_str(CLOSE_TAG);
    out.push('\n');
    out.push_str(&record.content);
    out
}
