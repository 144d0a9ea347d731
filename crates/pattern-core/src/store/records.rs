//! Shared record bookkeeping for the store implementations

use super::{PatternId, RecordFilter, StoredPattern};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use pattern_meta::PatternRecord;
use serde::{Deserialize, Serialize};

const RECORD_SET_VERSION: &str = "1";

/// The full contents of a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecordSet {
    version: String,
    next_id: u64,
    patterns: Vec<StoredPattern>,
}

impl Default for RecordSet {
    fn default() -> Self {
        Self {
            version: RECORD_SET_VERSION.to_string(),
            next_id: 1,
            patterns: Vec::new(),
        }
    }
}

impl RecordSet {
    pub fn get(&self, id: PatternId) -> Option<&StoredPattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&StoredPattern> {
        if slug.is_empty() {
            return None;
        }
        self.patterns.iter().find(|p| p.record.slug() == slug)
    }

    pub fn upsert(
        &mut self,
        id: Option<PatternId>,
        mut record: PatternRecord,
        now: DateTime<Utc>,
    ) -> Result<PatternId> {
        record.normalize();
        record.validate()?;
        let slug = record.slug();

        if let Some(owner) = self
            .patterns
            .iter()
            .find(|p| Some(p.id) != id && p.record.slug() == slug)
        {
            return Err(Error::UpsertRejected {
                reason: format!(
                    "slug '{}' is already used by pattern {} ('{}')",
                    slug, owner.id, owner.record.title
                ),
            });
        }

        match id {
            Some(id) => {
                let existing = self
                    .patterns
                    .iter_mut()
                    .find(|p| p.id == id)
                    .ok_or_else(|| Error::PatternNotFound(id.to_string()))?;
                existing.record = record;
                existing.last_updated = now;
                tracing::debug!(%id, %slug, "Updated pattern record");
                Ok(id)
            }
            None => {
                let id = PatternId::new(self.next_id);
                self.next_id += 1;
                self.patterns.push(StoredPattern {
                    id,
                    created: now,
                    last_updated: now,
                    record,
                });
                tracing::debug!(%id, %slug, "Created pattern record");
                Ok(id)
            }
        }
    }

    pub fn list(&self, filter: &RecordFilter) -> Vec<StoredPattern> {
        let mut out: Vec<StoredPattern> = self
            .patterns
            .iter()
            .filter(|p| filter.matches(&p.record))
            .cloned()
            .collect();
        out.sort_by_key(|p| p.id);
        out
    }

    pub fn delete(&mut self, id: PatternId) -> bool {
        let before = self.patterns.len();
        self.patterns.retain(|p| p.id != id);
        self.patterns.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn ids_start_at_one_and_are_not_reused() {
        let mut set = RecordSet::default();
        let a = set.upsert(None, PatternRecord::new("A"), now()).unwrap();
        let b = set.upsert(None, PatternRecord::new("B"), now()).unwrap();
        assert_eq!(a, PatternId::new(1));
        assert_eq!(b, PatternId::new(2));

        assert!(set.delete(b));
        let c = set.upsert(None, PatternRecord::new("C"), now()).unwrap();
        assert_eq!(c, PatternId::new(3));
    }

    #[test]
    fn duplicate_slug_on_create_is_rejected() {
        let mut set = RecordSet::default();
        set.upsert(None, PatternRecord::new("Hero Banner"), now())
            .unwrap();
        let err = set
            .upsert(None, PatternRecord::new("hero   banner!"), now())
            .unwrap_err();
        assert!(matches!(err, Error::UpsertRejected { .. }));
    }

    #[test]
    fn rename_onto_another_slug_is_rejected() {
        let mut set = RecordSet::default();
        set.upsert(None, PatternRecord::new("Hero"), now()).unwrap();
        let footer = set.upsert(None, PatternRecord::new("Footer"), now()).unwrap();
        let err = set
            .upsert(Some(footer), PatternRecord::new("Hero"), now())
            .unwrap_err();
        assert!(matches!(err, Error::UpsertRejected { .. }));
    }

    #[test]
    fn update_keeps_created_and_bumps_last_updated() {
        let mut set = RecordSet::default();
        let first = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let later = DateTime::parse_from_rfc3339("2024-06-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let id = set.upsert(None, PatternRecord::new("Hero"), first).unwrap();
        set.upsert(
            Some(id),
            PatternRecord::new("Hero").with_content("<p>new</p>"),
            later,
        )
        .unwrap();

        let stored = set.get(id).unwrap();
        assert_eq!(stored.created, first);
        assert_eq!(stored.last_updated, later);
        assert_eq!(stored.record.content, "<p>new</p>");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut set = RecordSet::default();
        let err = set
            .upsert(Some(PatternId::new(9)), PatternRecord::new("Hero"), now())
            .unwrap_err();
        assert!(matches!(err, Error::PatternNotFound(_)));
    }

    #[test]
    fn invalid_record_is_rejected_and_not_stored() {
        let mut set = RecordSet::default();
        let err = set.upsert(None, PatternRecord::new("  "), now()).unwrap_err();
        assert!(matches!(err, Error::Meta(_)));
        assert!(set.list(&RecordFilter::default()).is_empty());
    }

    #[test]
    fn upsert_normalizes() {
        let mut set = RecordSet::default();
        let mut record = PatternRecord::new(" Hero ");
        record.keywords = vec!["a".into(), " a".into()];
        let id = set.upsert(None, record, now()).unwrap();
        let stored = set.get(id).unwrap();
        assert_eq!(stored.record.title, "Hero");
        assert_eq!(stored.record.keywords, vec!["a"]);
    }

    #[test]
    fn empty_slug_never_matches() {
        let set = RecordSet::default();
        assert!(set.find_by_slug("").is_none());
    }
}
