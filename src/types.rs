//! OP_RETURN Extractor - Type System
//!
//! - `transaction`: Fetched transaction records and their outputs
//! - `outcome`: Per-transaction decoding outcomes and batch accumulation

pub mod outcome;
pub mod transaction;

pub use outcome::{BatchResult, BatchStats, DecodingOutcome};
pub use transaction::{TransactionRecord, TxOutput};
