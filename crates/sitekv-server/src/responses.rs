//! Response types for the KV proxy
//!
//! Success bodies carry `Access-Control-Allow-Origin: *`; error envelopes do
//! not. Both are JSON.

use rocket::http::Status;
use rocket::response::{self, Responder, Response};
use rocket::serde::json::Json;
use rocket::Request;
use serde::Serialize;
use serde_json::Value;
use sitekv_domain::constants::{
    ERROR_KEY_REQUIRED, ERROR_RETRIEVE_FAILED, ERROR_STORE_FAILED, ERROR_VALUE_REQUIRED,
};
use sitekv_domain::error::Error;
use tracing::{debug, error};

/// CORS header names
pub mod cors {
    /// Allowed origin header
    pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    /// Allowed methods header
    pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    /// Allowed request headers header
    pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";

    /// Any origin
    pub const ANY_ORIGIN: &str = "*";
    /// Methods served under `/api/kv`
    pub const METHODS: &str = "GET, PUT, OPTIONS";
    /// Request headers a browser may send
    pub const HEADERS: &str = "Content-Type";
}

/// `GET /api/kv/<key>` body
#[derive(Debug, Serialize)]
pub struct ValueBody {
    /// Stored value, `null` when unset
    pub value: Value,
}

/// `PUT /api/kv/<key>` body
#[derive(Debug, Serialize)]
pub struct PutAck {
    /// Always `true`
    pub success: bool,
}

/// `GET /health` body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"`
    pub status: &'static str,
    /// Name of the configured backing store
    pub backing_store: String,
    /// Server version
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// JSON success response readable from any origin
#[derive(Debug)]
pub struct KvJson<T>(pub T);

impl<'r, T: Serialize> Responder<'r, 'static> for KvJson<T> {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        Response::build_from(Json(self.0).respond_to(request)?)
            .raw_header(cors::ALLOW_ORIGIN, cors::ANY_ORIGIN)
            .ok()
    }
}

/// `204 No Content` answer to a CORS preflight
#[derive(Debug)]
pub struct Preflight;

impl<'r> Responder<'r, 'static> for Preflight {
    fn respond_to(self, _request: &'r Request<'_>) -> response::Result<'static> {
        Response::build()
            .status(Status::NoContent)
            .raw_header(cors::ALLOW_ORIGIN, cors::ANY_ORIGIN)
            .raw_header(cors::ALLOW_METHODS, cors::METHODS)
            .raw_header(cors::ALLOW_HEADERS, cors::HEADERS)
            .ok()
    }
}

/// Failure of a KV request, rendered as `{"error": "..."}`
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Empty or missing key segment
    #[error("{}", ERROR_KEY_REQUIRED)]
    MissingKey,

    /// PUT body without a `value` field
    #[error("{}", ERROR_VALUE_REQUIRED)]
    MissingValue,

    /// Backing store read failed or held a non-JSON value
    #[error("{}", ERROR_RETRIEVE_FAILED)]
    Retrieve(#[source] Error),

    /// Body unreadable or backing store write failed
    #[error("{}", ERROR_STORE_FAILED)]
    Store(#[source] Error),
}

impl ApiError {
    /// HTTP status for this failure
    pub fn status(&self) -> Status {
        match self {
            Self::MissingKey | Self::MissingValue => Status::BadRequest,
            Self::Retrieve(_) | Self::Store(_) => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        match &self {
            Self::Retrieve(cause) | Self::Store(cause) => {
                error!(uri = %request.uri(), error = %cause, "{self}");
            }
            Self::MissingKey | Self::MissingValue => {
                debug!(uri = %request.uri(), "Rejected KV request: {self}");
            }
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).respond_to(request)
    }
}
