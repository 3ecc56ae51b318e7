//! Error types for the oracle tools.

use thiserror::Error;
use zmoke_oracle_core::{QuoteError, StrKeyError};

/// Errors that can occur while running an oracle tool.
#[derive(Debug, Error)]
pub enum OracleError {
    /// Address decoding error.
    #[error("address error: {0}")]
    Address(#[from] StrKeyError),

    /// Quote signing error.
    #[error("quote error: {0}")]
    Quote(#[from] QuoteError),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Output serialization error.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for oracle tool operations.
pub type Result<T> = std::result::Result<T, OracleError>;
