//! Chain module - RPC connection and transaction confirmation
//!
//! This module provides:
//! - HTTP provider construction bound to a single RPC endpoint
//! - Signer-client construction bound to the endpoint's chain id
//! - Submit-and-await-receipt with success/failure classification

pub mod gateway;

pub use gateway::{submit_and_confirm, ChainGateway, SignerClient};
