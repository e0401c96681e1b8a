//! Common Test Utilities
//!
//! Shared fakes and fixtures for the unit and integration suites: an in-memory
//! transaction fetcher that records every call, an in-memory output sink, and
//! helpers for building verbose-style outputs.

#![allow(dead_code)]

use opreturn_extract::errors::{AppResult, RpcError, RpcResult};
use opreturn_extract::processor::OutputSink;
use opreturn_extract::rpc::TransactionFetcher;
use opreturn_extract::types::{TransactionRecord, TxOutput};
use std::collections::HashMap;
use std::sync::Mutex;

/// Bitcoin RPC test utilities and configuration
pub mod rpc_helpers;

/// Canned response for one txid
#[derive(Clone, Debug)]
pub enum MockResponse {
    Outputs(Vec<TxOutput>),
    NotFound,
    CallFailed(String),
}

/// In-memory fetcher; unknown txids behave as not found
#[derive(Default, Debug)]
pub struct MockFetcher {
    responses: HashMap<String, MockResponse>,
    calls: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outputs(mut self, txid: &str, outputs: Vec<TxOutput>) -> Self {
        self.responses
            .insert(txid.to_string(), MockResponse::Outputs(outputs));
        self
    }

    pub fn with_response(mut self, txid: &str, response: MockResponse) -> Self {
        self.responses.insert(txid.to_string(), response);
        self
    }

    /// Txids requested so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl TransactionFetcher for MockFetcher {
    async fn fetch_transaction(&self, txid: &str) -> RpcResult<TransactionRecord> {
        self.calls.lock().unwrap().push(txid.to_string());

        match self.responses.get(txid) {
            Some(MockResponse::Outputs(outputs)) => Ok(TransactionRecord {
                txid: txid.to_string(),
                outputs: outputs.clone(),
            }),
            Some(MockResponse::CallFailed(message)) => Err(RpcError::CallFailed {
                method: "getrawtransaction".to_string(),
                message: message.clone(),
            }),
            Some(MockResponse::NotFound) | None => Err(RpcError::TransactionNotFound {
                txid: txid.to_string(),
            }),
        }
    }
}

/// Sink that keeps every write in memory
#[derive(Default)]
pub struct MemorySink {
    pub writes: Vec<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines of the most recent write
    pub fn last(&self) -> Option<&Vec<String>> {
        self.writes.last()
    }
}

impl OutputSink for MemorySink {
    fn write_lines(&mut self, lines: &[String]) -> AppResult<()> {
        self.writes.push(lines.to_vec());
        Ok(())
    }
}

/// Output fixtures shaped like `getrawtransaction` verbose `vout` entries
pub mod fixtures {
    use opreturn_extract::types::TxOutput;

    pub const P2PKH_ASM: &str =
        "OP_DUP OP_HASH160 89abcdefabbaabbaabbaabbaabbaabbaabbaabba OP_EQUALVERIFY OP_CHECKSIG";

    /// A payment output followed by an OP_RETURN carrying `text` as hex
    pub fn text_payload_outputs(text: &str) -> Vec<TxOutput> {
        vec![
            TxOutput::with_asm(0, P2PKH_ASM),
            TxOutput::with_asm(1, &format!("OP_RETURN {}", hex::encode(text))),
        ]
    }

    /// An OP_RETURN output carrying `payload` verbatim
    pub fn raw_payload_outputs(payload: &str) -> Vec<TxOutput> {
        vec![TxOutput::with_asm(0, &format!("OP_RETURN {}", payload))]
    }

    /// Outputs with no data-carrier script
    pub fn payment_only_outputs() -> Vec<TxOutput> {
        vec![
            TxOutput::with_asm(0, P2PKH_ASM),
            TxOutput::with_asm(1, "0 751e76e8199196d454941c45d1b3a323f1433bd6"),
        ]
    }

    /// Deterministic 64-char txid for index `i`
    pub fn txid(i: u8) -> String {
        format!("{:02x}", i).repeat(32)
    }
}
