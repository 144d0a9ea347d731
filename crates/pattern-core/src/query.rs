//! Read-only query surface
//!
//! Pages through stored patterns ordered by title. The response shape uses
//! camelCase keys so it can be handed to block editors as-is.

use crate::store::{PatternId, RecordFilter, RecordStore, StoredPattern};
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query parameters. Unset page defaults to 1; unset `per_page` falls back
/// to the configured default. Values below 1 are clamped to 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PatternQuery {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
    pub search: Option<String>,
    pub category: Option<String>,
}

/// One pattern in a query response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternResponse {
    pub id: PatternId,
    pub name: String,
    pub title: String,
    pub content: String,
    pub description: String,
    pub categories: Vec<String>,
    pub keywords: Vec<String>,
    pub viewport_width: u32,
    pub block_types: Vec<String>,
    pub post_types: Vec<String>,
    pub template_types: Vec<String>,
    pub inserter: bool,
    pub last_updated: DateTime<Utc>,
    pub created: DateTime<Utc>,
}

impl From<StoredPattern> for PatternResponse {
    fn from(stored: StoredPattern) -> Self {
        let name = stored.name();
        let record = stored.record;
        Self {
            id: stored.id,
            name,
            title: record.title,
            content: record.content,
            description: record.description,
            categories: record.categories,
            keywords: record.keywords,
            viewport_width: record.viewport_width,
            block_types: record.block_types,
            post_types: record.post_types,
            template_types: record.template_types,
            inserter: record.inserter,
            last_updated: stored.last_updated,
            created: stored.created,
        }
    }
}

/// A page of results with totals over the whole filtered set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPage {
    pub patterns: Vec<PatternResponse>,
    pub total: usize,
    pub total_pages: usize,
    pub page: usize,
    pub per_page: usize,
}

/// Run `query` against `records`.
pub fn run_query(
    records: &dyn RecordStore,
    query: &PatternQuery,
    default_per_page: usize,
) -> Result<QueryPage> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(default_per_page).max(1);

    let filter = RecordFilter {
        search: query.search.clone().filter(|s| !s.trim().is_empty()),
        category: query.category.clone().filter(|c| !c.is_empty()),
    };

    let mut matches = records.list(&filter)?;
    matches.sort_by(|a, b| {
        a.record
            .title
            .to_lowercase()
            .cmp(&b.record.title.to_lowercase())
            .then(a.id.cmp(&b.id))
    });

    let total = matches.len();
    let total_pages = total.div_ceil(per_page);
    let patterns = matches
        .into_iter()
        .skip((page - 1).saturating_mul(per_page))
        .take(per_page)
        .map(PatternResponse::from)
        .collect();

    tracing::debug!(page, per_page, total, "Served pattern query");
    Ok(QueryPage {
        patterns,
        total,
        total_pages,
        page,
        per_page,
    })
}
