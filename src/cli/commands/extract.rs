use super::RpcArgs;
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::processor::{run_batch_file, TextFileSink};
use crate::rpc::BitcoinRpcClient;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Extract OP_RETURN data for a list of transactions
#[derive(Args)]
pub struct ExtractCommand {
    /// JSON file containing {"txids": [...]} (overrides paths.input_json)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Text file to write, one value per line (overrides paths.output_file)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub rpc: RpcArgs,
}

impl ExtractCommand {
    pub async fn run(&self, config: &AppConfig) -> AppResult<()> {
        let input = self
            .input
            .clone()
            .or_else(|| config.paths.input_json.clone())
            .ok_or_else(|| {
                AppError::Config(
                    "Transaction ID file not configured. Pass --input, set OPRETURN_INPUT_PATH, or configure paths.input_json in config.toml".to_string(),
                )
            })?;
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| config.paths.output_file.clone());

        let rpc_config = self.rpc.apply(config.bitcoin_rpc.clone());
        rpc_config
            .validate()
            .map_err(|e| AppError::Config(e.to_string()))?;

        info!("=== OP_RETURN Extraction ===");
        info!("  Input: {}", input.display());
        info!("  Output: {}", output.display());
        info!("  RPC: {} (user {})", rpc_config.url(), rpc_config.username);

        let mut sink = TextFileSink::new(&output);
        let (result, client) = run_batch_file(
            &input,
            move || async move {
                BitcoinRpcClient::connect(rpc_config)
                    .await
                    .map_err(AppError::Session)
            },
            &mut sink,
        )
        .await?;

        println!("Script completed.");
        println!("  - Transactions processed: {}", result.stats.processed);
        println!("  - Decoded: {}", result.stats.decoded);
        println!("  - Undecodable (written as hex): {}", result.stats.undecodable);
        println!("  - No OP_RETURN data: {}", result.stats.absent);
        println!("  - RPC errors (incl. retries): {}", client.get_error_count());
        println!("  - Output written to: {}", sink.path().display());

        Ok(())
    }
}
