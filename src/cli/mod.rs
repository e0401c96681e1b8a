use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use clap::{Parser, Subcommand};
use std::io::BufRead;
use std::path::PathBuf;

pub mod commands;

/// Bitcoin OP_RETURN Extractor
#[derive(Parser)]
#[command(name = "opreturn-extract")]
#[command(about = "Fetch transactions over Bitcoin RPC and decode their OP_RETURN data")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: ./config.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Wait for Enter before exiting
    #[arg(long, global = true)]
    pub pause: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Extract OP_RETURN data for every txid in a JSON file
    Extract(commands::extract::ExtractCommand),
    /// Extract and print the OP_RETURN data of a single transaction
    DecodeTxid(commands::decode::DecodeTxidCommand),
    /// Test Bitcoin RPC connectivity
    TestRpc(commands::test_rpc::TestRpcCommand),
}

pub async fn run(cli: Cli) -> AppResult<()> {
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .map_err(|e| AppError::Config(format!("Failed to load configuration: {}", e)))?;

    // RUST_LOG wins over the configured level
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .try_init();

    match cli.command {
        Commands::Extract(command) => command.run(&config).await,
        Commands::DecodeTxid(command) => command.run(&config).await,
        Commands::TestRpc(command) => command.run(&config).await,
    }
}

/// Block until the user presses Enter
pub fn wait_for_enter() {
    println!("Press Enter to exit...");
    let mut line = String::new();
    let _ = std::io::stdin().lock().read_line(&mut line);
}
