//! The pattern record
//!
//! A [`PatternRecord`] is the in-memory form of one block pattern. Its slug
//! is never stored: it is always derived from the title, so a record and its
//! file name cannot drift apart.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::slug::{is_filesystem_safe, slugify};

/// Viewport width used when none is given or the stored one is unreadable.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// Inserter visibility used when none is given.
pub const DEFAULT_INSERTER: bool = true;

/// One block pattern: metadata plus markup content.
///
/// Set-valued fields keep insertion order and never hold duplicates once
/// [`normalize`](Self::normalize) has run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatternRecord {
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
    pub keywords: Vec<String>,
    pub viewport_width: u32,
    pub block_types: Vec<String>,
    pub post_types: Vec<String>,
    pub template_types: Vec<String>,
    pub inserter: bool,
    pub content: String,
}

impl Default for PatternRecord {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            categories: Vec::new(),
            keywords: Vec::new(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            block_types: Vec::new(),
            post_types: Vec::new(),
            template_types: Vec::new(),
            inserter: DEFAULT_INSERTER,
            content: String::new(),
        }
    }
}

impl PatternRecord {
    /// Create a record with the given title and default values everywhere else.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = ordered_set(categories);
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = ordered_set(keywords);
        self
    }

    pub fn with_block_types<I, S>(mut self, block_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.block_types = ordered_set(block_types);
        self
    }

    pub fn with_post_types<I, S>(mut self, post_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.post_types = ordered_set(post_types);
        self
    }

    pub fn with_template_types<I, S>(mut self, template_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.template_types = ordered_set(template_types);
        self
    }

    pub fn with_viewport_width(mut self, viewport_width: u32) -> Self {
        self.viewport_width = viewport_width;
        self
    }

    pub fn with_inserter(mut self, inserter: bool) -> Self {
        self.inserter = inserter;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// The slug derived from the current title.
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }

    /// Trim text fields and set entries, drop empty entries and duplicates.
    ///
    /// Content is left untouched.
    pub fn normalize(&mut self) {
        self.title = self.title.trim().to_string();
        self.description = self.description.trim().to_string();
        for set in self.sets_mut() {
            *set = ordered_set(std::mem::take(set));
        }
    }

    /// Check that the record can be written to a pattern file and read back
    /// unchanged.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::invalid("title", "must not be empty"));
        }
        check_header_text("title", &self.title)?;

        let slug = self.slug();
        if !is_filesystem_safe(&slug) {
            return Err(Error::invalid(
                "title",
                format!("'{}' does not produce a usable slug", self.title),
            ));
        }

        if self.viewport_width == 0 {
            return Err(Error::invalid("viewport width", "must be greater than zero"));
        }

        if !self.description.is_empty() {
            check_header_text("description", &self.description)?;
        }

        for (field, set) in self.sets() {
            let mut seen = Vec::with_capacity(set.len());
            for entry in set {
                if entry.is_empty() {
                    return Err(Error::invalid(field, "entries must not be empty"));
                }
                if entry.contains(',') {
                    return Err(Error::invalid(
                        field,
                        format!("entry '{entry}' must not contain a comma"),
                    ));
                }
                check_header_text(field, entry)?;
                if seen.contains(&entry) {
                    return Err(Error::invalid(
                        field,
                        format!("entry '{entry}' is listed twice"),
                    ));
                }
                seen.push(entry);
            }
        }

        Ok(())
    }

    fn sets(&self) -> [(&'static str, &Vec<String>); 5] {
        [
            ("categories", &self.categories),
            ("keywords", &self.keywords),
            ("block types", &self.block_types),
            ("post types", &self.post_types),
            ("template types", &self.template_types),
        ]
    }

    fn sets_mut(&mut self) -> [&mut Vec<String>; 5] {
        [
            &mut self.categories,
            &mut self.keywords,
            &mut self.block_types,
            &mut self.post_types,
            &mut self.template_types,
        ]
    }
}

/// Collect strings into a trimmed, de-duplicated, order-preserving list.
pub fn ordered_set<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for item in items {
        let item: String = item.into();
        let item = item.trim();
        if !item.is_empty() && !out.iter().any(|existing| existing == item) {
            out.push(item.to_string());
        }
    }
    out
}

// Header values live on one ` * Key: value` line inside a `/** */` block.
fn check_header_text(field: &'static str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(Error::invalid(field, "must be a single line"));
    }
    if value.trim() != value {
        return Err(Error::invalid(
            field,
            "must not have leading or trailing whitespace",
        ));
    }
    if value.contains("*/") {
        return Err(Error::invalid(field, "must not contain '*/'"));
    }
    if value.ends_with('*') {
        return Err(Error::invalid(field, "must not end with '*'"));
    }
    Ok(())
}
