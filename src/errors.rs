use std::path::PathBuf;
use thiserror::Error;

/// Application-wide error type - single point of truth
///
/// Only the fatal conditions of a run live here. Anything that goes wrong for a
/// single transaction is reported through [`RpcError`] and absorbed by the
/// extraction pipeline.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// RPC session could not be established
    #[error("Failed to establish RPC session: {0}")]
    Session(#[source] RpcError),

    /// Transaction ID file does not exist
    #[error("Transaction ID file not found at: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// Transaction ID file exists but could not be read or parsed
    #[error("Invalid transaction ID file {}: {reason}", .path.display())]
    InputMalformed { path: PathBuf, reason: String },

    /// Output artifact could not be written
    #[error("Error writing OP_RETURN data to {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Setup failures abort the run before any transaction is fetched
    pub fn is_setup(&self) -> bool {
        matches!(
            self,
            AppError::Session(_) | AppError::InputNotFound { .. } | AppError::InputMalformed { .. }
        )
    }

    /// Output failures happen after extraction; results are lost
    pub fn is_output(&self) -> bool {
        matches!(self, AppError::OutputWrite { .. })
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        if self.is_setup() {
            2
        } else if self.is_output() {
            3
        } else {
            1
        }
    }
}

/// RPC error types
#[derive(Error, Debug)]
pub enum RpcError {
    /// Failed to establish connection to Bitcoin Core RPC server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// TXID string format is invalid (not valid hex or wrong length)
    #[error("Invalid txid: {txid}")]
    InvalidTxid { txid: String },

    /// RPC method call failed (covers network errors, authentication, etc.)
    #[error("RPC call failed: {method} - {message}")]
    CallFailed { method: String, message: String },

    /// Retry limit exceeded for RPC operation
    #[error("Max retries exceeded: {operation} (last error: {last_error})")]
    MaxRetriesExceeded {
        operation: String,
        last_error: String,
    },

    /// RPC request timed out
    #[error("Request timeout: {timeout_seconds}s for {operation}")]
    Timeout {
        timeout_seconds: u64,
        operation: String,
    },

    /// RPC returned unexpected or malformed response data
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Transaction exists in valid format but not found in blockchain/mempool
    #[error("Transaction not found: {txid}")]
    TransactionNotFound { txid: String },

    /// Node answered with a JSON-RPC error object
    #[error("RPC error {code} from {method}: {message}")]
    NodeRejected {
        method: String,
        code: i32,
        message: String,
    },
}

impl RpcError {
    /// Errors that will not go away by asking again
    pub fn is_retryable(&self) -> bool {
        !matches!(
            self,
            RpcError::InvalidTxid { .. }
                | RpcError::TransactionNotFound { .. }
                | RpcError::InvalidResponse(_)
                | RpcError::NodeRejected { .. }
        )
    }
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for RPC operations
pub type RpcResult<T> = Result<T, RpcError>;
