//! Transaction records as returned by verbose `getrawtransaction`
//!
//! Only the fields the extractor needs are kept. Each output's script text is
//! optional so a single odd output never invalidates the whole record.

use crate::errors::{RpcError, RpcResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One fetched transaction, owned for the duration of a single extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub txid: String,
    pub outputs: Vec<TxOutput>,
}

/// A transaction output as seen through `vout[n].scriptPubKey.asm`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    pub n: Option<u32>,
    /// Disassembled script, e.g. `OP_RETURN 48656c6c6f`
    pub script_asm: Option<String>,
}

impl TxOutput {
    pub fn with_asm(n: u32, asm: &str) -> Self {
        Self {
            n: Some(n),
            script_asm: Some(asm.to_string()),
        }
    }
}

impl TransactionRecord {
    /// Build a record from the verbose JSON form of a transaction
    ///
    /// The `vout` array must be present; a missing or non-string
    /// `scriptPubKey.asm` on an individual output is kept as `None`.
    pub fn from_verbose_json(txid: &str, json: &Value) -> RpcResult<Self> {
        let vout = json.get("vout").and_then(|v| v.as_array()).ok_or_else(|| {
            RpcError::InvalidResponse(format!("Transaction {} has no vout array", txid))
        })?;

        let outputs = vout
            .iter()
            .map(|output| TxOutput {
                n: output
                    .get("n")
                    .and_then(|n| n.as_u64())
                    .and_then(|n| u32::try_from(n).ok()),
                script_asm: output
                    .get("scriptPubKey")
                    .and_then(|spk| spk.get("asm"))
                    .and_then(|asm| asm.as_str())
                    .map(str::to_string),
            })
            .collect();

        let txid = json
            .get("txid")
            .and_then(|t| t.as_str())
            .unwrap_or(txid)
            .to_string();

        Ok(Self { txid, outputs })
    }
}
