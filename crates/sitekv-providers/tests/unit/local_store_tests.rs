//! Local store tests

use sitekv_providers::{FileLocalStore, LocalStore, MemoryLocalStore};
use tempfile::TempDir;

#[test]
fn test_memory_local_store_roundtrip() {
    let store = MemoryLocalStore::new();
    assert_eq!(store.get("kv:theme").unwrap(), None);

    store.set("kv:theme", "\"dark\"").unwrap();
    assert_eq!(store.get("kv:theme").unwrap().as_deref(), Some("\"dark\""));
}

#[test]
fn test_memory_local_store_prefilled() {
    let store = MemoryLocalStore::with_entries([("kv:counter", "7")]);
    assert_eq!(store.get("kv:counter").unwrap().as_deref(), Some("7"));
}

#[test]
fn test_file_local_store_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileLocalStore::open(dir.path().join("local.json")).unwrap();
    assert_eq!(store.get("kv:anything").unwrap(), None);
}

#[test]
fn test_file_local_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("local.json");

    let store = FileLocalStore::open(&path).unwrap();
    store.set("kv:theme", "\"dark\"").unwrap();
    store.set("kv:counter", "3").unwrap();
    drop(store);

    let reopened = FileLocalStore::open(&path).unwrap();
    assert_eq!(reopened.get("kv:theme").unwrap().as_deref(), Some("\"dark\""));
    assert_eq!(reopened.get("kv:counter").unwrap().as_deref(), Some("3"));
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn test_file_local_store_sets_aside_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("local.json");
    std::fs::write(&path, "definitely not json").unwrap();

    let store = FileLocalStore::open(&path).unwrap();
    assert_eq!(store.get("kv:theme").unwrap(), None);
    assert!(path.with_extension("corrupt").exists());

    store.set("kv:theme", "\"light\"").unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("kv:theme"));
}
