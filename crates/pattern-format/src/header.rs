//! Header fields of a pattern file
//!
//! Each metadata field is one ` * Label: value` line. Labels are matched
//! case-insensitively with spaces ignored, so `Post Types`, `posttypes`
//! and `POST TYPES` all name the same field.

use pattern_meta::{DEFAULT_VIEWPORT_WIDTH, PatternRecord, ordered_set};

/// A recognized header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderField {
    Title,
    Slug,
    Description,
    Categories,
    PostTypes,
    Keywords,
    BlockTypes,
    TemplateTypes,
    ViewportWidth,
    Inserter,
}

impl HeaderField {
    /// Fields in the order they are written.
    pub const ORDER: [HeaderField; 10] = [
        HeaderField::Title,
        HeaderField::Slug,
        HeaderField::Description,
        HeaderField::Categories,
        HeaderField::PostTypes,
        HeaderField::Keywords,
        HeaderField::BlockTypes,
        HeaderField::TemplateTypes,
        HeaderField::ViewportWidth,
        HeaderField::Inserter,
    ];

    /// The label as written in a file.
    pub fn label(&self) -> &'static str {
        match self {
            HeaderField::Title => "Title",
            HeaderField::Slug => "Slug",
            HeaderField::Description => "Description",
            HeaderField::Categories => "Categories",
            HeaderField::PostTypes => "Post Types",
            HeaderField::Keywords => "Keywords",
            HeaderField::BlockTypes => "Block Types",
            HeaderField::TemplateTypes => "Template Types",
            HeaderField::ViewportWidth => "Viewport Width",
            HeaderField::Inserter => "Inserter",
        }
    }

    /// Resolve a raw header key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized: String = key
            .chars()
            .filter(|c| *c != ' ')
            .flat_map(char::to_lowercase)
            .collect();
        Self::ORDER.into_iter().find(|field| {
            field
                .label()
                .chars()
                .filter(|c| *c != ' ')
                .flat_map(char::to_lowercase)
                .eq(normalized.chars())
        })
    }

    /// The value this field contributes to a header, or `None` when the
    /// line is omitted.
    pub(crate) fn render(&self, record: &PatternRecord) -> Option<String> {
        let set = |values: &[String]| (!values.is_empty()).then(|| values.join(", "));
        match self {
            HeaderField::Title => Some(record.title.clone()),
            HeaderField::Slug => Some(record.slug()),
            HeaderField::Description => {
                let description = record.description.trim();
                (!description.is_empty()).then(|| description.to_string())
            }
            HeaderField::Categories => set(&record.categories),
            HeaderField::PostTypes => set(&record.post_types),
            HeaderField::Keywords => set(&record.keywords),
            HeaderField::BlockTypes => set(&record.block_types),
            HeaderField::TemplateTypes => set(&record.template_types),
            HeaderField::ViewportWidth => Some(record.viewport_width.to_string()),
            HeaderField::Inserter => Some(record.inserter.to_string()),
        }
    }

    /// Store a parsed value on `record`. The slug is derived, never read.
    pub(crate) fn apply(&self, record: &mut PatternRecord, value: &str) {
        match self {
            HeaderField::Title => record.title = value.to_string(),
            HeaderField::Slug => {}
            HeaderField::Description => record.description = value.to_string(),
            HeaderField::Categories => record.categories = split_list(value),
            HeaderField::PostTypes => record.post_types = split_list(value),
            HeaderField::Keywords => record.keywords = split_list(value),
            HeaderField::BlockTypes => record.block_types = split_list(value),
            HeaderField::TemplateTypes => record.template_types = split_list(value),
            HeaderField::ViewportWidth => record.viewport_width = parse_viewport_width(value),
            HeaderField::Inserter => record.inserter = parse_inserter(value),
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    ordered_set(value.split(','))
}

// Optional `+` then leading digits, so `1024px` reads as 1024. Zero counts
// as unset.
fn parse_viewport_width(value: &str) -> u32 {
    let unsigned = value.strip_prefix('+').unwrap_or(value);
    let digits: String = unsigned.chars().take_while(char::is_ascii_digit).collect();
    match digits.parse::<u32>() {
        Ok(width) if width > 0 => width,
        _ => DEFAULT_VIEWPORT_WIDTH,
    }
}

fn parse_inserter(value: &str) -> bool {
    !matches!(value.to_lowercase().as_str(), "no" | "false" | "0")
}
