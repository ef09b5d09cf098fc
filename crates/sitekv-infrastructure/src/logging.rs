//! Structured logging with tracing
//!
//! Configures the global subscriber: plain or JSON to stderr, optionally
//! mirrored to a daily-rolling file. Stdout is left to command output.

use std::path::Path;

use sitekv_domain::error::{Error, Result};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_CONFIG_DIR, LOG_ENV_VAR};

/// Initialize logging with the provided configuration
///
/// `SITEKV_LOG` takes precedence over `config.level` and accepts full
/// `EnvFilter` directives (`sitekv_application=debug,info`).
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config.file_output.as_deref().map(|path| {
        let directory = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let prefix = path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new(DEFAULT_CONFIG_DIR));
        tracing_appender::rolling::daily(directory, prefix)
    });

    // Layer types differ between JSON and plain output, hence the two branches.
    let registry = Registry::default().with(filter);
    let initialized = if config.json_format {
        let console = fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr);
        match file_appender {
            Some(appender) => registry
                .with(console)
                .with(fmt::layer().json().with_writer(appender).with_ansi(false))
                .try_init(),
            None => registry.with(console).try_init(),
        }
    } else {
        let console = fmt::layer().with_target(true).with_writer(std::io::stderr);
        match file_appender {
            Some(appender) => registry
                .with(console)
                .with(fmt::layer().with_writer(appender).with_ansi(false))
                .try_init(),
            None => registry.with(console).try_init(),
        }
    };

    initialized.map_err(|e| Error::Infrastructure {
        message: format!("Failed to install tracing subscriber: {e}"),
        source: Some(e.into()),
    })?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
