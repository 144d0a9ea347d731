//! In-memory record store

use super::records::RecordSet;
use super::{PatternId, RecordFilter, RecordStore, StoredPattern};
use crate::Result;
use chrono::Utc;
use pattern_meta::PatternRecord;

/// [`RecordStore`] that keeps everything in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: RecordSet,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn get(&self, id: PatternId) -> Result<Option<StoredPattern>> {
        Ok(self.records.get(id).cloned())
    }

    fn find_by_slug(&self, slug: &str) -> Result<Option<StoredPattern>> {
        Ok(self.records.find_by_slug(slug).cloned())
    }

    fn upsert(&mut self, id: Option<PatternId>, record: PatternRecord) -> Result<PatternId> {
        self.records.upsert(id, record, Utc::now())
    }

    fn list(&self, filter: &RecordFilter) -> Result<Vec<StoredPattern>> {
        Ok(self.records.list(filter))
    }

    fn delete(&mut self, id: PatternId) -> Result<bool> {
        Ok(self.records.delete(id))
    }
}
