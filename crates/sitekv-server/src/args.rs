//! Command line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for sitekv
#[derive(Parser, Debug)]
#[command(name = "sitekv")]
#[command(about = "Key-value proxy endpoint and offline-first client cache")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// What to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the KV proxy endpoint
    Serve,

    /// Print the value of a key, reconciled against the proxy
    Get {
        /// Key to read
        key: String,
    },

    /// Write a JSON value for a key and wait for the proxy write
    Put {
        /// Key to write
        key: String,
        /// JSON value, for example `"dark"` or `{"count": 3}`
        value: String,
    },

    /// Write the effective configuration to a TOML file
    Init {
        /// Destination file
        #[arg(default_value = "sitekv.toml")]
        path: PathBuf,
        /// Replace the file if it already exists
        #[arg(long)]
        force: bool,
    },
}
