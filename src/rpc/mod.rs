//! Bitcoin Core RPC integration module
//!
//! This module provides all Bitcoin Core RPC-related functionality including:
//! - **Client** - Async wrapper around the blocking `corepc-client` with retry logic
//! - **Retry** - Exponential backoff retry utilities and timeout wrappers
//! - **TransactionFetcher** - The seam the extraction pipeline fetches through
//!
//! Calls are issued one at a time; the client holds no cache.

pub mod client;
pub mod retry;

use crate::errors::RpcResult;
use crate::types::TransactionRecord;

// Re-export main types
pub use client::BitcoinRpcClient;
pub use retry::{calculate_next_backoff, execute_with_timeout};

/// Source of transaction records by txid
///
/// Implemented by [`BitcoinRpcClient`] against a live node, and by in-memory
/// fakes in tests.
#[allow(async_fn_in_trait)]
pub trait TransactionFetcher {
    /// Fetch the verbose form of a transaction
    async fn fetch_transaction(&self, txid: &str) -> RpcResult<TransactionRecord>;
}
