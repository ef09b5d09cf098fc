//! Domain constants
//!
//! Values that are part of the wire contract between the page, the proxy
//! endpoint and the local durable store. Changing any of these breaks
//! existing clients or stored data.

/// Mount point of the KV proxy routes
pub const KV_API_BASE_PATH: &str = "/api/kv";

/// Prefix applied to logical keys in the local durable store (`kv:<key>`)
pub const LOCAL_KEY_PREFIX: &str = "kv:";

/// Error envelope message for a missing or empty key segment
pub const ERROR_KEY_REQUIRED: &str = "Key is required";

/// Error envelope message for a PUT body without a `value` field
pub const ERROR_VALUE_REQUIRED: &str = "Value is required";

/// Error envelope message for any failed read
pub const ERROR_RETRIEVE_FAILED: &str = "Failed to retrieve value";

/// Error envelope message for any failed write
pub const ERROR_STORE_FAILED: &str = "Failed to store value";

/// Build the local durable store key for a logical key
pub fn local_key(key: &str) -> String {
    format!("{LOCAL_KEY_PREFIX}{key}")
}
