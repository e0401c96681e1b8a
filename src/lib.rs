//! Bitcoin OP_RETURN Extractor
//!
//! Fetches transactions from a Bitcoin Core compatible node, pulls the payload
//! out of the first OP_RETURN output, and decodes it as hex-encoded UTF-8.

pub mod cli;
pub mod config;
pub mod decoder;
pub mod errors;
pub mod processor;
pub mod rpc;
pub mod types;
