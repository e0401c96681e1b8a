use crate::config::BitcoinRpcConfig;
use crate::errors::{RpcError, RpcResult};
use crate::rpc::{calculate_next_backoff, execute_with_timeout, TransactionFetcher};
use crate::types::TransactionRecord;
use corepc_client::bitcoin::Txid;
use corepc_client::client_sync::{v28::Client, Auth, Error as ClientError};
use serde_json::{json, Value};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

/// `RPC_INVALID_ADDRESS_OR_KEY`: what `getrawtransaction` answers for an unknown txid
const RPC_INVALID_ADDRESS_OR_KEY: i32 = -5;

/// Bitcoin RPC client with retry logic
///
/// Wraps the blocking `corepc-client` in `spawn_blocking` + timeout so the
/// async runtime is never stalled by a slow node.
pub struct BitcoinRpcClient {
    client: Arc<Client>,
    config: BitcoinRpcConfig,
    error_count: Arc<AtomicU64>,
}

impl BitcoinRpcClient {
    /// Create a client and verify the session with `getblockchaininfo`
    ///
    /// Fails with [`RpcError::ConnectionFailed`] if the node is unreachable or
    /// rejects the credentials.
    pub async fn connect(config: BitcoinRpcConfig) -> RpcResult<Self> {
        let client = Self::create_sync_client(&config)?;
        let rpc = Self {
            client,
            config,
            error_count: Arc::new(AtomicU64::new(0)),
        };

        rpc.test_connection().await.map_err(|e| {
            RpcError::ConnectionFailed(format!(
                "Failed to connect to Bitcoin RPC at {} - check host, port, credentials, and that the node is running: {}",
                rpc.config.url(),
                e
            ))
        })?;

        info!(
            "Successfully connected to RPC: {}:{}",
            rpc.config.host, rpc.config.port
        );
        Ok(rpc)
    }

    /// Fetch `getrawtransaction <txid> true` and keep the fields we need
    pub async fn get_transaction_verbose(&self, txid: &str) -> RpcResult<TransactionRecord> {
        Txid::from_str(txid).map_err(|_| RpcError::InvalidTxid {
            txid: txid.to_string(),
        })?;

        let operation = format!("getrawtransaction({})", txid);
        let json = self
            .call_with_retry(&operation, {
                let txid = txid.to_string();
                move |client: &Client| -> RpcResult<Value> {
                    client
                        .call::<Value>("getrawtransaction", &[json!(txid), json!(true)])
                        .map_err(|e| match classify_call_error("getrawtransaction", e) {
                            RpcError::NodeRejected { code, message, .. }
                                if code == RPC_INVALID_ADDRESS_OR_KEY =>
                            {
                                debug!("getrawtransaction({}): {}", txid, message);
                                RpcError::TransactionNotFound { txid: txid.clone() }
                            }
                            other => other,
                        })
                }
            })
            .await?;

        TransactionRecord::from_verbose_json(txid, &json)
    }

    /// Single-shot connectivity probe
    pub async fn test_connection(&self) -> RpcResult<()> {
        let client = Arc::clone(&self.client);

        match execute_with_timeout(self.config.timeout_seconds, move || -> RpcResult<()> {
            let info = client
                .get_blockchain_info()
                .map_err(|e| classify_call_error("getblockchaininfo", e))?;
            debug!(
                "Bitcoin Core connection test successful - chain: {}, blocks: {}",
                info.chain, info.blocks
            );
            Ok(())
        })
        .await
        {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => Err(RpcError::CallFailed {
                method: "spawn_blocking".to_string(),
                message: format!("Connection test task failed: {}", e),
            }),
            Err(_) => Err(RpcError::Timeout {
                timeout_seconds: self.config.timeout_seconds,
                operation: "connection_test".to_string(),
            }),
        }
    }

    /// Number of failed RPC attempts so far, retries included
    pub fn get_error_count(&self) -> u64 {
        self.error_count.load(Ordering::Relaxed)
    }

    pub fn config(&self) -> &BitcoinRpcConfig {
        &self.config
    }

    async fn call_with_retry<T, F>(&self, operation: &str, call: F) -> RpcResult<T>
    where
        T: Send + 'static,
        F: Fn(&Client) -> RpcResult<T> + Clone + Send + 'static,
    {
        let mut attempts = 0;
        let mut backoff = Duration::from_millis(self.config.initial_backoff_ms);

        loop {
            let client = Arc::clone(&self.client);
            let call = call.clone();

            let failure = match execute_with_timeout(self.config.timeout_seconds, move || {
                call(client.as_ref())
            })
            .await
            {
                Ok(Ok(Ok(value))) => {
                    if attempts > 0 {
                        debug!("{} succeeded after {} attempts", operation, attempts + 1);
                    }
                    return Ok(value);
                }
                Ok(Ok(Err(e))) => e,
                Ok(Err(e)) => {
                    self.error_count.fetch_add(1, Ordering::Relaxed);
                    error!("Spawn blocking error for {}: {}", operation, e);
                    return Err(RpcError::CallFailed {
                        method: "spawn_blocking".to_string(),
                        message: format!("Task execution error: {}", e),
                    });
                }
                Err(_) => RpcError::Timeout {
                    timeout_seconds: self.config.timeout_seconds,
                    operation: operation.to_string(),
                },
            };

            attempts += 1;
            self.error_count.fetch_add(1, Ordering::Relaxed);

            if !failure.is_retryable() {
                debug!("{} failed (non-retryable): {}", operation, failure);
                return Err(failure);
            }

            if attempts >= self.config.max_retries {
                error!(
                    "{} failed after {} attempts: {}",
                    operation, attempts, failure
                );
                return Err(match failure {
                    RpcError::Timeout { .. } => failure,
                    _ => RpcError::MaxRetriesExceeded {
                        operation: operation.to_string(),
                        last_error: failure.to_string(),
                    },
                });
            }

            warn!(
                "RPC attempt {} failed for {}, retrying in {:?}: {}",
                attempts, operation, backoff, failure
            );
            sleep(backoff).await;

            backoff = calculate_next_backoff(
                backoff,
                self.config.backoff_multiplier,
                self.config.max_backoff_seconds,
            );
        }
    }

    /// Create synchronous client for use inside spawn_blocking
    fn create_sync_client(config: &BitcoinRpcConfig) -> RpcResult<Arc<Client>> {
        let auth = Auth::UserPass(config.username.clone(), config.password.clone());
        let client = Client::new_with_auth(&config.url(), auth).map_err(|e| {
            RpcError::ConnectionFailed(format!("Failed to create Bitcoin RPC client: {}", e))
        })?;

        Ok(Arc::new(client))
    }
}

/// Split node replies from transport trouble
///
/// A JSON-RPC error object is the node's final answer. Refused connections and
/// HTTP errors without a JSON body stay retryable.
fn classify_call_error(method: &str, error: ClientError) -> RpcError {
    match error {
        ClientError::JsonRpc(jsonrpc::Error::Rpc(rpc)) => RpcError::NodeRejected {
            method: method.to_string(),
            code: rpc.code,
            message: rpc.message,
        },
        other => RpcError::CallFailed {
            method: method.to_string(),
            message: other.to_string(),
        },
    }
}

impl TransactionFetcher for BitcoinRpcClient {
    async fn fetch_transaction(&self, txid: &str) -> RpcResult<TransactionRecord> {
        self.get_transaction_verbose(txid).await
    }
}
