//! KV proxy route tests

use std::sync::Arc;

use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::LocalResponse;
use serde_json::{Value, json};
use sitekv_domain::ports::BackingStore;
use sitekv_providers::MemoryBackingStore;
use sitekv_server::handlers::KvState;
use sitekv_server::transport::http::{HttpTransport, HttpTransportConfig};

use crate::test_utils::{FailingStore, client_for, memory_client};

const ACAO: &str = "Access-Control-Allow-Origin";

fn allow_origin<'a>(response: &'a LocalResponse<'_>) -> Option<&'a str> {
    response.headers().get_one(ACAO)
}

async fn json_body(response: LocalResponse<'_>) -> Value {
    response.into_json().await.expect("JSON body")
}

#[rocket::async_test]
async fn test_put_then_get_round_trip() {
    let (client, _store) = memory_client().await;

    let put = client
        .put("/api/kv/theme-preference")
        .header(ContentType::JSON)
        .body(r#"{"value":"dark"}"#)
        .dispatch()
        .await;
    assert_eq!(put.status(), Status::Ok);
    assert_eq!(put.content_type(), Some(ContentType::JSON));
    assert_eq!(allow_origin(&put), Some("*"));
    assert_eq!(json_body(put).await, json!({"success": true}));

    let get = client.get("/api/kv/theme-preference").dispatch().await;
    assert_eq!(get.status(), Status::Ok);
    assert_eq!(get.content_type(), Some(ContentType::JSON));
    assert_eq!(allow_origin(&get), Some("*"));
    assert_eq!(json_body(get).await, json!({"value": "dark"}));
}

#[rocket::async_test]
async fn test_structured_values_round_trip() {
    let (client, _store) = memory_client().await;
    let value = json!({"visits": 3, "tags": ["rust", "kv"], "nested": {"ok": true}});

    client
        .put("/api/kv/profile")
        .body(json!({ "value": value }).to_string())
        .dispatch()
        .await;
    let get = client.get("/api/kv/profile").dispatch().await;

    assert_eq!(json_body(get).await, json!({ "value": value }));
}

#[rocket::async_test]
async fn test_last_write_wins() {
    let (client, _store) = memory_client().await;

    for body in [r#"{"value":1}"#, r#"{"value":2}"#] {
        client.put("/api/kv/counter").body(body).dispatch().await;
    }
    let get = client.get("/api/kv/counter").dispatch().await;

    assert_eq!(json_body(get).await, json!({"value": 2}));
}

#[rocket::async_test]
async fn test_unknown_key_reads_null() {
    let (client, _store) = memory_client().await;

    let get = client.get("/api/kv/never-set").dispatch().await;

    assert_eq!(get.status(), Status::Ok);
    assert_eq!(allow_origin(&get), Some("*"));
    assert_eq!(json_body(get).await, json!({"value": null}));
}

#[rocket::async_test]
async fn test_put_hands_json_string_to_store() {
    let (client, store) = memory_client().await;

    client
        .put("/api/kv/theme-preference")
        .body(r#"{"value":"dark"}"#)
        .dispatch()
        .await;

    assert_eq!(
        store.get("theme-preference").await.unwrap().as_deref(),
        Some("\"dark\"")
    );
}

#[rocket::async_test]
async fn test_stored_null_reads_like_unset() {
    let (client, store) = memory_client().await;

    let put = client
        .put("/api/kv/cleared")
        .body(r#"{"value":null}"#)
        .dispatch()
        .await;
    assert_eq!(put.status(), Status::Ok);
    assert_eq!(store.get("cleared").await.unwrap().as_deref(), Some("null"));

    let get = client.get("/api/kv/cleared").dispatch().await;
    assert_eq!(json_body(get).await, json!({"value": null}));
}

#[rocket::async_test]
async fn test_missing_value_field_is_rejected() {
    let (client, store) = memory_client().await;

    let put = client
        .put("/api/kv/theme-preference")
        .body(r#"{"other":"dark"}"#)
        .dispatch()
        .await;

    assert_eq!(put.status(), Status::BadRequest);
    assert_eq!(put.content_type(), Some(ContentType::JSON));
    assert_eq!(allow_origin(&put), None);
    assert_eq!(json_body(put).await, json!({"error": "Value is required"}));
    assert!(store.is_empty());
}

#[rocket::async_test]
async fn test_non_object_body_is_rejected() {
    let (client, store) = memory_client().await;

    let put = client.put("/api/kv/counter").body("5").dispatch().await;

    assert_eq!(put.status(), Status::BadRequest);
    assert_eq!(json_body(put).await, json!({"error": "Value is required"}));
    assert!(store.is_empty());
}

#[rocket::async_test]
async fn test_unparseable_body_fails_store() {
    let (client, store) = memory_client().await;

    let put = client
        .put("/api/kv/theme-preference")
        .body("{not json")
        .dispatch()
        .await;

    assert_eq!(put.status(), Status::InternalServerError);
    assert_eq!(allow_origin(&put), None);
    assert_eq!(json_body(put).await, json!({"error": "Failed to store value"}));
    assert!(store.is_empty());
}

#[rocket::async_test]
async fn test_empty_key_is_rejected() {
    let (client, store) = memory_client().await;

    for uri in ["/api/kv", "/api/kv/"] {
        let get = client.get(uri).dispatch().await;
        assert_eq!(get.status(), Status::BadRequest, "GET {uri}");
        assert_eq!(allow_origin(&get), None);
        assert_eq!(json_body(get).await, json!({"error": "Key is required"}));

        let put = client.put(uri).body(r#"{"value":1}"#).dispatch().await;
        assert_eq!(put.status(), Status::BadRequest, "PUT {uri}");
        assert_eq!(json_body(put).await, json!({"error": "Key is required"}));
    }
    assert!(store.is_empty());
}

#[rocket::async_test]
async fn test_nested_path_is_not_a_key() {
    let (client, _store) = memory_client().await;

    let get = client.get("/api/kv/a/b").dispatch().await;

    assert_eq!(get.status(), Status::NotFound);
}

#[rocket::async_test]
async fn test_percent_encoded_key_round_trip() {
    let (client, _store) = memory_client().await;

    client
        .put("/api/kv/theme%20preference")
        .body(r#"{"value":"dark"}"#)
        .dispatch()
        .await;
    let get = client.get("/api/kv/theme%20preference").dispatch().await;

    assert_eq!(json_body(get).await, json!({"value": "dark"}));
}

#[rocket::async_test]
async fn test_backing_store_failures_map_to_500() {
    let client = client_for(Arc::new(FailingStore)).await;

    let get = client.get("/api/kv/theme-preference").dispatch().await;
    assert_eq!(get.status(), Status::InternalServerError);
    assert_eq!(allow_origin(&get), None);
    assert_eq!(
        json_body(get).await,
        json!({"error": "Failed to retrieve value"})
    );

    let put = client
        .put("/api/kv/theme-preference")
        .body(r#"{"value":"dark"}"#)
        .dispatch()
        .await;
    assert_eq!(put.status(), Status::InternalServerError);
    assert_eq!(json_body(put).await, json!({"error": "Failed to store value"}));
}

#[rocket::async_test]
async fn test_corrupt_stored_value_fails_retrieve() {
    let (client, store) = memory_client().await;
    store.put("legacy", "not json{").await.unwrap();

    let get = client.get("/api/kv/legacy").dispatch().await;

    assert_eq!(get.status(), Status::InternalServerError);
    assert_eq!(
        json_body(get).await,
        json!({"error": "Failed to retrieve value"})
    );
}

#[rocket::async_test]
async fn test_preflight() {
    let (client, _store) = memory_client().await;

    let response = client
        .options("/api/kv/theme-preference")
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::NoContent);
    let headers = response.headers();
    assert_eq!(headers.get_one(ACAO), Some("*"));
    assert_eq!(
        headers.get_one("Access-Control-Allow-Methods"),
        Some("GET, PUT, OPTIONS")
    );
    assert_eq!(
        headers.get_one("Access-Control-Allow-Headers"),
        Some("Content-Type")
    );
    assert!(response.into_bytes().await.unwrap_or_default().is_empty());
}

#[rocket::async_test]
async fn test_oversized_body_fails_store() {
    let store = MemoryBackingStore::new();
    let config = HttpTransportConfig {
        max_body_bytes: 16,
        ..HttpTransportConfig::default()
    };
    let transport = HttpTransport::new(config, KvState::new(Arc::new(store.clone())));
    let client = rocket::local::asynchronous::Client::tracked(transport.rocket())
        .await
        .expect("valid rocket instance");

    let put = client
        .put("/api/kv/essay")
        .body(json!({ "value": "x".repeat(64) }).to_string())
        .dispatch()
        .await;

    assert_eq!(put.status(), Status::InternalServerError);
    assert_eq!(json_body(put).await, json!({"error": "Failed to store value"}));
    assert!(store.is_empty());
}
