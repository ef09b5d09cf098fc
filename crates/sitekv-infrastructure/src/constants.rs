//! Infrastructure layer constants
//!
//! Domain-level constants live in `sitekv_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "sitekv.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "sitekv";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SITEKV";

/// Separator between nested keys in environment variables
/// (`SITEKV_SERVER__PORT` sets `server.port`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default bind address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default proxy port
pub const DEFAULT_SERVER_PORT: u16 = 8787;

/// Default limit on a PUT body (1 MiB)
pub const DEFAULT_MAX_BODY_BYTES: u64 = 1024 * 1024;

// ============================================================================
// CLIENT CONSTANTS
// ============================================================================

/// Default proxy base URL used by the client tools
pub const DEFAULT_CLIENT_BASE_URL: &str = "http://127.0.0.1:8787";

/// Default HTTP timeout for the remote client
pub const DEFAULT_CLIENT_TIMEOUT_SECS: u64 = 30;

/// File name of the local durable store under the data directory
pub const LOCAL_STORE_FILENAME: &str = "local.json";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured log filter
pub const LOG_ENV_VAR: &str = "SITEKV_LOG";
