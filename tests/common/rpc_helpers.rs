//! Bitcoin RPC Test Utilities and Configuration
//!
//! Live-node tests skip themselves when nothing answers on the test endpoint.

use opreturn_extract::config::BitcoinRpcConfig;
use std::net::{SocketAddr, TcpStream};
use std::time::Duration;

/// Standard test RPC host (localhost)
pub const TEST_RPC_HOST: &str = "127.0.0.1";

/// Standard test RPC port (regtest default)
pub const TEST_RPC_PORT: u16 = 18443;

/// Standard test RPC credentials
pub const TEST_RPC_USERNAME: &str = "bitcoin";
pub const TEST_RPC_PASSWORD: &str = "bitcoin";

/// RPC configuration shared by all live-node tests
pub fn create_test_rpc_config() -> BitcoinRpcConfig {
    BitcoinRpcConfig {
        host: TEST_RPC_HOST.to_string(),
        port: TEST_RPC_PORT,
        username: TEST_RPC_USERNAME.to_string(),
        password: TEST_RPC_PASSWORD.to_string(),
        timeout_seconds: 10,
        max_retries: 2,
        initial_backoff_ms: 50,
        backoff_multiplier: 1.5,
        max_backoff_seconds: 1,
    }
}

/// `true` if something accepts TCP connections on the test endpoint
///
/// Prints a skip notice otherwise.
pub fn is_rpc_available(test_name: &str) -> bool {
    let config = create_test_rpc_config();
    let address = format!("{}:{}", config.host, config.port);

    let reachable = address
        .parse::<SocketAddr>()
        .map(|addr| TcpStream::connect_timeout(&addr, Duration::from_millis(500)).is_ok())
        .unwrap_or(false);

    if !reachable {
        eprintln!(
            "⚠️  Skipping {} - Bitcoin RPC not available at {}",
            test_name, address
        );
    }
    reachable
}
