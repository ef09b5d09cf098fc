//! Shared slots and typed views

use serde::{Deserialize, Serialize};
use serde_json::json;
use sitekv_providers::MemoryLocalStore;

use crate::test_utils::{MockRemote, cache_with};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Profile {
    name: String,
    visits: u32,
}

#[tokio::test]
async fn test_bindings_of_a_key_share_one_value() {
    let (cache, _remote) = cache_with(MockRemote::new(), MemoryLocalStore::new());

    let header = cache.bind("theme-preference", "light".to_string());
    let footer = cache.bind("theme-preference", "light".to_string());
    let mut changes = footer.subscribe();

    header.set("dark".to_string());

    assert_eq!(footer.get(), "dark");
    assert!(changes.has_changed().unwrap());
    assert_eq!(*changes.borrow_and_update(), json!("dark"));
}

#[tokio::test]
async fn test_first_binding_default_seeds_the_slot() {
    let (cache, _remote) = cache_with(MockRemote::new(), MemoryLocalStore::new());

    let first = cache.bind("counter", 5_i64);
    let second = cache.bind("counter", 0_i64);

    assert_eq!(second.get(), 5);
    assert_eq!(first.key(), "counter");
}

#[tokio::test]
async fn test_mismatched_shape_reads_as_binding_default() {
    let (cache, _remote) = cache_with(MockRemote::new(), MemoryLocalStore::new());

    let number = cache.bind("shared", 5_i64);
    let text = cache.bind("shared", "fallback".to_string());

    assert_eq!(number.get(), 5);
    assert_eq!(text.get(), "fallback");
    assert_eq!(text.raw(), json!(5));
}

#[tokio::test]
async fn test_structured_values_round_trip_through_the_cache() {
    let (cache, remote) = cache_with(MockRemote::new(), MemoryLocalStore::new());
    let initial = Profile {
        name: "guest".to_string(),
        visits: 0,
    };

    let profile = cache.bind("profile", initial);
    profile.update(|mut p| {
        p.visits += 1;
        p
    });
    profile.flushed().await;

    assert_eq!(profile.get().visits, 1);
    assert_eq!(
        remote.stored_values(),
        vec![json!({"name": "guest", "visits": 1})]
    );
}

#[tokio::test]
async fn test_cache_clones_share_slots() {
    let (cache, _remote) = cache_with(MockRemote::new(), MemoryLocalStore::new());
    let other = cache.clone();

    let theme = cache.bind("theme-preference", "light".to_string());
    theme.set("dark".to_string());

    assert_eq!(other.peek("theme-preference"), Some(json!("dark")));
    assert_eq!(other.peek("unbound"), None);
    assert!(!other.is_empty());
}
