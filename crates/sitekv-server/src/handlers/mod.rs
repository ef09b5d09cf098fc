//! Route handlers
//!
//! Each KV handler performs exactly one backing store operation. No retries,
//! no authentication.

pub mod health;
pub mod kv;

use std::sync::Arc;

use rocket::{Build, Rocket, Route, routes};
use sitekv_domain::constants::KV_API_BASE_PATH;
use sitekv_domain::ports::BackingStore;

/// Shared state managed by Rocket
#[derive(Debug, Clone)]
pub struct KvState {
    /// Hosted backing store
    pub store: Arc<dyn BackingStore>,
}

impl KvState {
    /// Wrap a backing store
    pub fn new(store: Arc<dyn BackingStore>) -> Self {
        Self { store }
    }
}

/// Routes mounted under [`KV_API_BASE_PATH`]
pub fn kv_routes() -> Vec<Route> {
    routes![
        kv::get_value,
        kv::put_value,
        kv::preflight,
        kv::get_without_key,
        kv::put_without_key,
    ]
}

/// Routes mounted at the root
pub fn root_routes() -> Vec<Route> {
    routes![health::health]
}

/// Build the proxy application with Rocket's default configuration
pub fn kv_rocket(state: KvState) -> Rocket<Build> {
    mount(rocket::build(), state)
}

/// Mount every route and the shared state on `rocket`
pub fn mount(rocket: Rocket<Build>, state: KvState) -> Rocket<Build> {
    rocket
        .manage(state)
        .mount(KV_API_BASE_PATH, kv_routes())
        .mount("/", root_routes())
}
