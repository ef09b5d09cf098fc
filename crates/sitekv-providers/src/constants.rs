//! Provider constants

/// JSON content type header value
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Cloudflare REST API base URL
pub const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Provider name reported by the in-memory backing store
pub const PROVIDER_MEMORY: &str = "memory";

/// Provider name reported by the Redis backing store
pub const PROVIDER_REDIS: &str = "redis";

/// Provider name reported by the Cloudflare Workers KV backing store
pub const PROVIDER_CLOUDFLARE: &str = "cloudflare";
