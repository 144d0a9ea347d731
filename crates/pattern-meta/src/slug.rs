//! Slug derivation
//!
//! A slug is the stable identity of a pattern and the base name of its file.

/// Derive a slug from a title.
///
/// Lowercases, turns every run of non-alphanumeric characters into a single
/// hyphen, and trims hyphens from both ends. The result never contains a
/// path separator or a dot, so it is always safe as a file name. Returns an
/// empty string when the title has no alphanumeric characters.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase().filter(|lc| lc.is_alphanumeric()));
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Whether `slug` is usable as a pattern file base name.
pub fn is_filesystem_safe(slug: &str) -> bool {
    !slug.is_empty() && !slug.starts_with('.') && !slug.contains(['/', '\\'])
}
