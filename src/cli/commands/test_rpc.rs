use super::RpcArgs;
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::rpc::BitcoinRpcClient;
use clap::Args;
use tracing::{error, info};

/// Test Bitcoin RPC connectivity
#[derive(Args)]
pub struct TestRpcCommand {
    #[command(flatten)]
    pub rpc: RpcArgs,
}

impl TestRpcCommand {
    pub async fn run(&self, config: &AppConfig) -> AppResult<()> {
        info!("=== Testing Bitcoin RPC Connection ===");

        let rpc_config = self.rpc.apply(config.bitcoin_rpc.clone());
        info!("Testing connection to: {}", rpc_config.url());
        info!("Username: {}", rpc_config.username);

        match BitcoinRpcClient::connect(rpc_config).await {
            Ok(client) => {
                println!(
                    "Bitcoin RPC connection test PASSED ({})",
                    client.config().url()
                );
                Ok(())
            }
            Err(e) => {
                error!("Failed to connect: {}", e);
                println!("Bitcoin RPC connection test FAILED");
                println!("Error: {}", e);
                println!("\nTroubleshooting tips:");
                println!("1. Check that the node is running");
                println!("2. Verify the RPC host and port");
                println!("3. Ensure RPC credentials are valid");
                println!("4. Check that the RPC server is enabled (server=1)");

                Err(AppError::Session(e))
            }
        }
    }
}
