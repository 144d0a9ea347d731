//! Tests for the JSON-file record store

use pattern_core::{Error, JsonRecordStore, PatternId, RecordFilter, RecordStore};
use pattern_fs::NormalizedPath;
use pattern_meta::PatternRecord;
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::fs;
use std::sync::{Arc, Barrier};
use std::thread;
use tempfile::TempDir;

fn store_in(temp: &TempDir) -> JsonRecordStore {
    JsonRecordStore::at_root(&NormalizedPath::new(temp.path()))
}

#[test]
fn missing_file_is_an_empty_store() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    assert!(store.is_empty().unwrap());
    assert!(!store.path().exists());
}

#[test]
fn records_persist_across_instances() {
    let temp = TempDir::new().unwrap();
    let mut store = store_in(&temp);
    let id = store
        .upsert(
            None,
            PatternRecord::new("Hero Banner")
                .with_categories(["featured"])
                .with_content("<!-- wp:cover /-->"),
        )
        .unwrap();

    let reopened = store_in(&temp);
    let stored = reopened.get(id).unwrap().unwrap();
    assert_eq!(stored.record.title, "Hero Banner");
    assert_eq!(stored.record.categories, vec!["featured"]);
    assert_eq!(stored.name(), "hero-banner");
    assert_eq!(stored.created, stored.last_updated);
}

#[test]
fn file_is_camel_case_json() {
    let temp = TempDir::new().unwrap();
    let mut store = store_in(&temp);
    store
        .upsert(None, PatternRecord::new("Hero").with_block_types(["core/cover"]))
        .unwrap();

    let raw = fs::read_to_string(temp.path().join(".patterns/records.json")).unwrap();
    assert!(raw.contains("\"nextId\": 2"));
    assert!(raw.contains("\"lastUpdated\""));
    assert!(raw.contains("\"blockTypes\""));
}

#[test]
fn save_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let mut store = store_in(&temp);
    store.upsert(None, PatternRecord::new("A")).unwrap();
    store.upsert(None, PatternRecord::new("B")).unwrap();

    let mut entries: Vec<_> = fs::read_dir(temp.path().join(".patterns"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    entries.sort();
    assert_eq!(entries, vec!["records.json", "records.lock"]);
    assert_eq!(
        store.lock_path(),
        NormalizedPath::new(temp.path()).join(".patterns/records.lock")
    );
}

#[test]
fn rejected_upsert_does_not_touch_the_file() {
    let temp = TempDir::new().unwrap();
    let mut store = store_in(&temp);
    store.upsert(None, PatternRecord::new("Hero")).unwrap();
    let before = fs::read_to_string(store.path().to_native()).unwrap();

    let err = store.upsert(None, PatternRecord::new("HERO")).unwrap_err();
    assert!(matches!(err, Error::UpsertRejected { .. }));

    let after = fs::read_to_string(store.path().to_native()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn delete_and_list() {
    let temp = TempDir::new().unwrap();
    let mut store = store_in(&temp);
    let a = store.upsert(None, PatternRecord::new("A")).unwrap();
    let b = store.upsert(None, PatternRecord::new("B")).unwrap();

    assert!(store.delete(a).unwrap());
    assert!(!store.delete(PatternId::new(99)).unwrap());

    let remaining: Vec<_> = store
        .list(&RecordFilter::default())
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(remaining, vec![b]);
}

#[test]
fn corrupt_file_is_reported() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(".patterns")).unwrap();
    fs::write(temp.path().join(".patterns/records.json"), "{ not json").unwrap();

    let store = store_in(&temp);
    let err = store.list(&RecordFilter::default()).unwrap_err();
    assert!(matches!(err, Error::StoreCorrupt { .. }));
}

#[test]
fn concurrent_writers_keep_every_record() {
    let temp = TempDir::new().unwrap();
    let root = NormalizedPath::new(temp.path());

    let num_threads = 8;
    let writes_per_thread = 10;
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let root = root.clone();
            let barrier = Arc::clone(&barrier);

            thread::spawn(move || {
                let mut store = JsonRecordStore::at_root(&root);
                barrier.wait();
                for i in 0..writes_per_thread {
                    store
                        .upsert(None, PatternRecord::new(format!("T{thread_id} P{i}")))
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let stored = JsonRecordStore::at_root(&root)
        .list(&RecordFilter::default())
        .unwrap();
    assert_eq!(stored.len(), num_threads * writes_per_thread);

    let ids: HashSet<_> = stored.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), stored.len());
}
