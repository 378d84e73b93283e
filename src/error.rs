//! Error types for the ICS20 CLI

use ethers::types::H256;
use thiserror::Error;

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("invalid denom format: {0}")]
    InvalidDenomFormat(String),

    #[error("chain unavailable: {0}")]
    ChainUnavailable(String),

    #[error("transaction reverted{}", fmt_tx_hash(.tx_hash))]
    TransactionReverted { tx_hash: Option<H256> },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("wallet error: {0}")]
    Wallet(String),
}

fn fmt_tx_hash(tx_hash: &Option<H256>) -> String {
    match tx_hash {
        Some(hash) => format!(" (TxHash: {hash:#x})"),
        None => String::new(),
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
