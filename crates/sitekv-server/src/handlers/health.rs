//! Health probe

use rocket::serde::json::Json;
use rocket::{State, get};

use super::KvState;
use crate::responses::HealthResponse;

/// Report liveness and the configured backing store
#[get("/health")]
pub fn health(state: &State<KvState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        backing_store: state.store.provider_name().to_string(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
