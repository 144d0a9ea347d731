//! Record storage
//!
//! The record store owns the canonical copy of every pattern. Pattern files
//! are derived from it. Two implementations are provided:
//!
//! - [`InMemoryRecordStore`] for tests and one-shot tooling
//! - [`JsonRecordStore`] persisted at `.patterns/records.json`

mod json;
mod memory;
mod records;

pub use json::JsonRecordStore;
pub use memory::InMemoryRecordStore;

use crate::Result;
use chrono::{DateTime, Utc};
use pattern_meta::PatternRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned record identifier. Ids start at 1 and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternId(u64);

impl PatternId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A record as held by a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPattern {
    pub id: PatternId,
    pub created: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub record: PatternRecord,
}

impl StoredPattern {
    /// The record's slug.
    pub fn name(&self) -> String {
        self.record.slug()
    }
}

/// Selection applied by [`RecordStore::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Case-insensitive substring over title, description, keywords and content
    pub search: Option<String>,
    /// Exact category membership
    pub category: Option<String>,
}

impl RecordFilter {
    pub fn matches(&self, record: &PatternRecord) -> bool {
        if let Some(category) = &self.category
            && !record.categories.iter().any(|c| c == category)
        {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                let hit = |text: &str| text.to_lowercase().contains(&term);
                hit(&record.title)
                    || hit(&record.description)
                    || record.keywords.iter().any(|k| hit(k))
                    || hit(&record.content)
            }
        }
    }
}

/// Storage for pattern records.
///
/// `upsert` normalizes and validates the record and enforces slug
/// uniqueness. Writes take `&mut self`; a store is used from one thread.
pub trait RecordStore {
    /// Fetch a record by id.
    fn get(&self, id: PatternId) -> Result<Option<StoredPattern>>;

    /// Fetch the record whose title derives `slug`.
    fn find_by_slug(&self, slug: &str) -> Result<Option<StoredPattern>>;

    /// Create a record (`id == None`) or replace an existing one.
    ///
    /// # Errors
    /// - [`Error::PatternNotFound`](crate::Error::PatternNotFound) when `id` is unknown
    /// - [`Error::UpsertRejected`](crate::Error::UpsertRejected) when another record owns the slug
    /// - [`Error::Meta`](crate::Error::Meta) when the record fails validation
    fn upsert(&mut self, id: Option<PatternId>, record: PatternRecord) -> Result<PatternId>;

    /// Records matching `filter`, in id order.
    fn list(&self, filter: &RecordFilter) -> Result<Vec<StoredPattern>>;

    /// Remove a record. Returns whether it existed.
    fn delete(&mut self, id: PatternId) -> Result<bool>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.list(&RecordFilter::default())?.is_empty())
    }
}
