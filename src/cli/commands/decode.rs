use super::RpcArgs;
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::processor::ExtractionPipeline;
use crate::rpc::BitcoinRpcClient;
use crate::types::DecodingOutcome;
use clap::Args;
use tracing::info;

/// Extract the OP_RETURN data of one transaction and print it
#[derive(Args)]
pub struct DecodeTxidCommand {
    /// Transaction ID to decode
    pub txid: String,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub rpc: RpcArgs,
}

impl DecodeTxidCommand {
    pub async fn run(&self, config: &AppConfig) -> AppResult<()> {
        info!("Starting transaction decoding for TXID: {}", self.txid);

        let client = BitcoinRpcClient::connect(self.rpc.apply(config.bitcoin_rpc.clone()))
            .await
            .map_err(AppError::Session)?;

        let outcome = ExtractionPipeline::new(&client).extract(&self.txid).await;

        if self.json {
            println!("{}", render_json(&self.txid, &outcome)?);
            return Ok(());
        }

        match &outcome {
            DecodingOutcome::Decoded(text) => println!("{}", text),
            DecodingOutcome::RawUndecodable(hex) => {
                println!("Hex data: {} (Decoding failed)", hex)
            }
            DecodingOutcome::Absent => {
                println!("No OP_RETURN data found for transaction: {}", self.txid)
            }
        }

        Ok(())
    }
}

fn render_json(txid: &str, outcome: &DecodingOutcome) -> AppResult<String> {
    let rendered = serde_json::to_string_pretty(&serde_json::json!({
        "txid": txid,
        "outcome": outcome,
    }))
    .map_err(std::io::Error::from)?;
    Ok(rendered)
}
