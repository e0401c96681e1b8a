use crate::config::BitcoinRpcConfig;
use clap::Args;

pub mod decode;
pub mod extract;
pub mod test_rpc;

/// RPC connection overrides shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct RpcArgs {
    /// Bitcoin RPC host (overrides config.toml)
    #[arg(long)]
    pub rpc_host: Option<String>,

    /// Bitcoin RPC port (overrides config.toml)
    #[arg(long)]
    pub rpc_port: Option<u16>,

    /// Bitcoin RPC username (overrides config.toml)
    #[arg(long)]
    pub rpc_user: Option<String>,

    /// Bitcoin RPC password (overrides config.toml)
    #[arg(long)]
    pub rpc_password: Option<String>,
}

impl RpcArgs {
    pub fn apply(&self, mut config: BitcoinRpcConfig) -> BitcoinRpcConfig {
        if let Some(host) = &self.rpc_host {
            config.host = host.clone();
        }
        if let Some(port) = self.rpc_port {
            config.port = port;
        }
        if let Some(username) = &self.rpc_user {
            config.username = username.clone();
        }
        if let Some(password) = &self.rpc_password {
            config.password = password.clone();
        }
        config
    }
}
