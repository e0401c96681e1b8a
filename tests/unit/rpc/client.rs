use opreturn_extract::config::BitcoinRpcConfig;
use opreturn_extract::errors::RpcError;
use opreturn_extract::rpc::{BitcoinRpcClient, TransactionFetcher};
use opreturn_extract::types::TxOutput;

use crate::common::rpc_helpers::create_test_rpc_config;
use crate::common::{MockFetcher, MockResponse};

// Tests for the RPC configuration and the fetcher seam
//
// None of these need a live node.

#[test]
fn test_rpc_config_creation() {
    let config = BitcoinRpcConfig::default();

    assert_eq!(config.url(), "http://127.0.0.1:14122");
    assert_eq!(config.timeout_seconds, 60);
    assert!(config.max_retries > 0);
    assert!(config.initial_backoff_ms > 0);
    assert!(config.backoff_multiplier > 1.0);
    assert!(config.max_backoff_seconds > 0);
}

#[test]
fn test_test_config_is_valid() {
    let config = create_test_rpc_config();
    assert!(config.validate().is_ok());
    assert_eq!(config.url(), "http://127.0.0.1:18443");
}

#[test]
fn test_rpc_config_url_formats() {
    for (host, port, expected) in [
        ("localhost", 8332, "http://localhost:8332"),
        ("10.0.0.2", 14122, "http://10.0.0.2:14122"),
        ("node.example.com", 18443, "http://node.example.com:18443"),
    ] {
        let config = BitcoinRpcConfig {
            host: host.to_string(),
            port,
            ..Default::default()
        };
        assert_eq!(config.url(), expected);
    }
}

#[tokio::test]
async fn test_connect_unreachable_node_fails() {
    let config = BitcoinRpcConfig {
        // Reserved port, nothing listens
        port: 9,
        timeout_seconds: 2,
        ..Default::default()
    };

    match BitcoinRpcClient::connect(config).await {
        Err(RpcError::ConnectionFailed(_)) => {}
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => println!("Something answered on port 9; nothing to assert"),
    }
}

#[tokio::test]
async fn test_mock_fetcher_returns_outputs() {
    let fetcher = MockFetcher::new().with_outputs(
        "aa",
        vec![TxOutput::with_asm(0, "OP_RETURN 6869")],
    );

    let record = fetcher.fetch_transaction("aa").await.unwrap();
    assert_eq!(record.txid, "aa");
    assert_eq!(record.outputs.len(), 1);
    assert_eq!(fetcher.calls(), vec!["aa"]);
}

#[tokio::test]
async fn test_mock_fetcher_errors() {
    let fetcher = MockFetcher::new()
        .with_response("bad", MockResponse::CallFailed("Mock RPC error".to_string()));

    assert!(matches!(
        fetcher.fetch_transaction("bad").await,
        Err(RpcError::CallFailed { .. })
    ));
    assert!(matches!(
        fetcher.fetch_transaction("unknown").await,
        Err(RpcError::TransactionNotFound { .. })
    ));
    assert_eq!(fetcher.call_count(), 2);
}
