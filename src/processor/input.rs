//! Transaction ID list loading
//!
//! The input artifact is a JSON object with a `txids` array:
//!
//! ```json
//! { "txids": ["4b72a223...", "f1d2e3..."] }
//! ```

use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
struct TransactionIdList {
    txids: Vec<String>,
}

/// Read the ordered txid list; any failure here is fatal for the run
pub fn load_transaction_ids(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => AppError::InputMalformed {
            path: path.to_path_buf(),
            reason: format!("could not read file: {}", e),
        },
    })?;

    let list: TransactionIdList =
        serde_json::from_str(&content).map_err(|e| AppError::InputMalformed {
            path: path.to_path_buf(),
            reason: format!("Invalid JSON format: {}", e),
        })?;

    info!(
        "Successfully loaded {} transaction IDs from: {}",
        list.txids.len(),
        path.display()
    );
    Ok(list.txids)
}
