//! Command dispatch
//!
//! Loads configuration, sets up logging and runs the selected command.

use std::path::Path;

use sitekv_infrastructure::config::{AppConfig, ConfigLoader};
use sitekv_infrastructure::factory::{create_backing_store, create_kv_cache};
use sitekv_infrastructure::logging::init_logging;
use tracing::info;

use crate::args::{Cli, Command};
use crate::commands;
use crate::handlers::KvState;
use crate::transport::http::{HttpTransport, HttpTransportConfig};

/// Run the command selected on the command line
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging)?;

    match cli.command {
        Command::Serve => run_server(&config).await,
        Command::Get { key } => {
            let cache = create_kv_cache(&config.client)?;
            let value = commands::get_value(&cache, &key).await?;
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Command::Put { key, value } => {
            let cache = create_kv_cache(&config.client)?;
            commands::put_value(&cache, &key, &value).await?;
            Ok(())
        }
        Command::Init { path, force } => {
            commands::write_config(&config, &path, force)?;
            Ok(())
        }
    }
}

/// Run the KV proxy endpoint until shutdown
pub async fn run_server(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        host = %config.server.host,
        port = config.server.port,
        provider = ?config.backing_store.provider,
        "Starting sitekv proxy"
    );

    let store = create_backing_store(&config.backing_store)?;
    let transport = HttpTransport::new(
        HttpTransportConfig::from(&config.server),
        KvState::new(store),
    );
    transport.start().await?;
    Ok(())
}

/// Load configuration from optional path
pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}
