//! Provider factory tests

use serde_json::json;
use sitekv_infrastructure::config::{
    BackingStoreConfig, BackingStoreProvider, ClientConfig, CloudflareConfig, RedisConfig,
};
use sitekv_infrastructure::factory::{
    create_backing_store, create_kv_cache, create_local_store,
};
use tempfile::TempDir;

#[tokio::test]
async fn test_memory_backing_store() {
    let store = create_backing_store(&BackingStoreConfig::default()).unwrap();

    assert_eq!(store.provider_name(), "memory");
    store.put("theme", "\"dark\"").await.unwrap();
    assert_eq!(store.get("theme").await.unwrap().as_deref(), Some("\"dark\""));
}

#[test]
fn test_redis_store_is_created_lazily() {
    let config = BackingStoreConfig {
        provider: BackingStoreProvider::Redis,
        redis: RedisConfig {
            url: Some("redis://127.0.0.1:6379".to_string()),
            namespace: Some("profile".to_string()),
        },
        ..BackingStoreConfig::default()
    };

    let store = create_backing_store(&config).unwrap();
    assert_eq!(store.provider_name(), "redis");
}

#[test]
fn test_cloudflare_requires_credentials() {
    let config = BackingStoreConfig {
        provider: BackingStoreProvider::Cloudflare,
        cloudflare: CloudflareConfig::default(),
        ..BackingStoreConfig::default()
    };

    let error = create_backing_store(&config).unwrap_err();
    assert!(error.to_string().contains("account_id is required"));
}

#[test]
fn test_cloudflare_store() {
    let config = BackingStoreConfig {
        provider: BackingStoreProvider::Cloudflare,
        cloudflare: CloudflareConfig {
            account_id: Some("acct".to_string()),
            namespace_id: Some("ns".to_string()),
            api_token: Some("token".to_string()),
            ..CloudflareConfig::default()
        },
        ..BackingStoreConfig::default()
    };

    let store = create_backing_store(&config).unwrap();
    assert_eq!(store.provider_name(), "cloudflare");
}

#[test]
fn test_local_store_at_configured_path() {
    let dir = TempDir::new().unwrap();
    let config = ClientConfig {
        local_store_path: Some(dir.path().join("nested").join("local.json")),
        ..ClientConfig::default()
    };

    let store = create_local_store(&config).unwrap();
    store.set("kv:theme", "\"dark\"").unwrap();

    let reopened = create_local_store(&config).unwrap();
    assert_eq!(reopened.get("kv:theme").unwrap().as_deref(), Some("\"dark\""));
}

#[tokio::test]
async fn test_kv_cache_seeds_from_local_file() {
    let dir = TempDir::new().unwrap();
    let config = ClientConfig {
        // Nothing listens here; the reconcile fetch fails and is logged.
        base_url: "http://127.0.0.1:9".to_string(),
        local_store_path: Some(dir.path().join("local.json")),
        ..ClientConfig::default()
    };
    create_local_store(&config)
        .unwrap()
        .set("kv:counter", "41")
        .unwrap();

    let cache = create_kv_cache(&config).unwrap();
    let counter = cache.bind("counter", 0_i64);

    assert_eq!(counter.get(), 41);
    counter.reconciled().await;
    assert_eq!(counter.get(), 41);
    assert_eq!(cache.peek("counter"), Some(json!(41)));
}

#[test]
fn test_kv_cache_rejects_bad_base_url() {
    let dir = TempDir::new().unwrap();
    let config = ClientConfig {
        base_url: "mailto:someone@example.com".to_string(),
        local_store_path: Some(dir.path().join("local.json")),
        ..ClientConfig::default()
    };

    assert!(create_kv_cache(&config).is_err());
}
