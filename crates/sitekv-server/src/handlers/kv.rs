//! `/api/kv/<key>` handlers

use rocket::http::Status;
use rocket::http::uri::Segments;
use rocket::http::uri::fmt::Path;
use rocket::serde::json::{self, Json};
use rocket::{State, get, options, put};
use serde_json::Value;
use sitekv_domain::entities::Entry;
use sitekv_domain::error::Error;
use tracing::debug;

use super::KvState;
use crate::responses::{ApiError, KvJson, Preflight, PutAck, ValueBody};

/// Read the value stored under `key`
///
/// An unset key reads as `{"value": null}`.
#[get("/<key>")]
pub async fn get_value(
    key: &str,
    state: &State<KvState>,
) -> Result<KvJson<ValueBody>, ApiError> {
    let stored = state.store.get(key).await.map_err(ApiError::Retrieve)?;
    let value = match stored {
        Some(raw) => Entry::from_stored(key, &raw).map_err(ApiError::Retrieve)?.value,
        None => Value::Null,
    };

    debug!(key = %key, found = !value.is_null(), "KV read");
    Ok(KvJson(ValueBody { value }))
}

/// Store the `value` field of the JSON body under `key`
///
/// A `null` value is stored as such and reads back like an unset key.
#[put("/<key>", data = "<body>")]
pub async fn put_value(
    key: &str,
    body: Result<Json<Value>, json::Error<'_>>,
    state: &State<KvState>,
) -> Result<KvJson<PutAck>, ApiError> {
    let body = body.map_err(|e| ApiError::Store(body_error(e)))?;
    let value = value_field(body.into_inner())?;
    let entry = Entry::new(key, value).map_err(|_| ApiError::MissingKey)?;

    state
        .store
        .put(&entry.key, &entry.to_stored())
        .await
        .map_err(ApiError::Store)?;

    debug!(key = %entry.key, "KV write");
    Ok(KvJson(PutAck { success: true }))
}

/// CORS preflight for any path under the KV mount
#[options("/<_path..>")]
pub fn preflight(_path: Segments<'_, Path>) -> Preflight {
    Preflight
}

/// GET with an empty key segment (`/api/kv`, `/api/kv/`)
#[get("/<rest..>", rank = 2)]
pub fn get_without_key(rest: Segments<'_, Path>) -> Result<ApiError, Status> {
    missing_key(&rest)
}

/// PUT with an empty key segment (`/api/kv`, `/api/kv/`)
#[put("/<rest..>", rank = 2)]
pub fn put_without_key(rest: Segments<'_, Path>) -> Result<ApiError, Status> {
    missing_key(&rest)
}

/// Blank remainder means no key; a nested path is simply not a KV resource.
fn missing_key(rest: &Segments<'_, Path>) -> Result<ApiError, Status> {
    if rest.clone().all(str::is_empty) {
        Ok(ApiError::MissingKey)
    } else {
        Err(Status::NotFound)
    }
}

/// Extract `value` from a parsed body
///
/// A literal `null` body cannot be destructured and counts as a failed
/// write; any other body without a `value` field is a caller error.
fn value_field(body: Value) -> Result<Value, ApiError> {
    match body {
        Value::Object(mut fields) => fields.remove("value").ok_or(ApiError::MissingValue),
        Value::Null => Err(ApiError::Store(Error::validation("request body is null"))),
        _ => Err(ApiError::MissingValue),
    }
}

fn body_error(error: json::Error<'_>) -> Error {
    match error {
        json::Error::Io(e) => Error::from(e),
        json::Error::Parse(_, e) => Error::from(e),
    }
}
