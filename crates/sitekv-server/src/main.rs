//! sitekv - KV proxy endpoint and persistence cache client
//!
//! | Command | Description |
//! |---------|-------------|
//! | `sitekv serve` | Run the proxy endpoint |
//! | `sitekv get <key>` | Print the current value of a key |
//! | `sitekv put <key> <json>` | Write a value through the persistence cache |

use clap::Parser;
use sitekv_server::{Cli, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli).await
}
