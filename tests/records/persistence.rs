//! Persistence tests: full-document rewrite and failed writes.

use crate::common::*;

#[test]
fn created_record_survives_reopen() {
    let t = TestStore::new();
    t.store.create(rex()).unwrap();

    let reopened = t.reopen();
    assert_eq!(reopened.len(), 6);
    assert_eq!(reopened.get("5").unwrap().name, "Rex");
}

#[test]
fn document_has_single_animals_key() {
    let t = TestStore::new();
    t.store.create(rex()).unwrap();

    let raw: Value = serde_json::from_slice(&std::fs::read(t.data_file()).unwrap()).unwrap();
    let top = raw.as_object().unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top["animals"].as_array().unwrap().len(), 6);
}

#[test]
fn missing_data_file_starts_empty() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = RecordStore::open(dir.path().join("nothing-here.json")).unwrap();
    assert!(store.is_empty());
    assert!(store.query(&Criteria::new()).is_empty());
}

#[test]
fn failed_write_publishes_nothing() {
    let storage = Arc::new(MemoryStorage::with_records(zoo()));
    let store = RecordStore::builder()
        .storage(storage.clone())
        .open()
        .unwrap();

    storage.fail_writes(true);
    let err = store.create(rex()).unwrap_err();
    assert!(err.is_persistence());
    assert_eq!(store.all(), zoo());
    assert_eq!(storage.snapshot(), zoo());
}
