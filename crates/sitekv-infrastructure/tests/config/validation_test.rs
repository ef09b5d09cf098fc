//! Configuration validation tests

use sitekv_domain::error::Error;
use sitekv_infrastructure::config::{
    AppConfig, BackingStoreConfig, BackingStoreProvider, ClientConfig, CloudflareConfig,
    ConfigBuilder, LoggingConfig, RedisConfig, ServerConfig, validate_app_config,
};

fn assert_config_error(config: &AppConfig, needle: &str) {
    let error = validate_app_config(config).unwrap_err();
    assert!(matches!(error, Error::Configuration { .. }), "{error}");
    assert!(error.to_string().contains(needle), "{error}");
}

#[test]
fn test_defaults_are_valid() {
    validate_app_config(&AppConfig::default()).unwrap();
}

#[test]
fn test_zero_port_rejected() {
    let config = ConfigBuilder::new()
        .with_server(ServerConfig {
            port: 0,
            ..ServerConfig::default()
        })
        .build();
    assert_config_error(&config, "port cannot be 0");
}

#[test]
fn test_zero_body_limit_rejected() {
    let config = ConfigBuilder::new()
        .with_server(ServerConfig {
            max_body_bytes: 0,
            ..ServerConfig::default()
        })
        .build();
    assert_config_error(&config, "body size");
}

#[test]
fn test_redis_requires_url() {
    let config = ConfigBuilder::new()
        .with_backing_store(BackingStoreConfig {
            provider: BackingStoreProvider::Redis,
            redis: RedisConfig::default(),
            ..BackingStoreConfig::default()
        })
        .build();
    assert_config_error(&config, "redis.url");
}

#[test]
fn test_cloudflare_lists_missing_fields() {
    let config = ConfigBuilder::new()
        .with_backing_store(BackingStoreConfig {
            provider: BackingStoreProvider::Cloudflare,
            cloudflare: CloudflareConfig {
                account_id: Some("acct".to_string()),
                ..CloudflareConfig::default()
            },
            ..BackingStoreConfig::default()
        })
        .build();
    assert_config_error(&config, "namespace_id, api_token");
}

#[test]
fn test_invalid_base_url_rejected() {
    let config = ConfigBuilder::new()
        .with_client(ClientConfig {
            base_url: "not a url".to_string(),
            ..ClientConfig::default()
        })
        .build();
    assert_config_error(&config, "client.base_url");
}

#[test]
fn test_invalid_log_level_rejected() {
    let config = ConfigBuilder::new()
        .with_logging(LoggingConfig {
            level: "chatty".to_string(),
            ..LoggingConfig::default()
        })
        .build();
    assert_config_error(&config, "Invalid log level");
}
