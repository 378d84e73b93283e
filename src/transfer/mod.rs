//! Token-transfer orchestration
//!
//! This module provides:
//! - The transfer request/outcome data model
//! - The step-planning decision (which pipeline a denom takes)
//! - The sequential orchestrator driving steps through the chain gateway

pub mod executor;
pub mod orchestrator;

pub use executor::{ContractExecutor, StepExecutor};
pub use orchestrator::Orchestrator;

use ethers::types::{H256, U256};

use crate::denom::is_hex_address;
use crate::error::{CliError, CliResult};

/// Immutable description of one cross-chain transfer.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    /// Derivation index of the sending account.
    pub from_index: u32,
    /// Recipient address on the counterparty chain, passed through opaquely.
    pub to_address: String,
    /// Token quantity; must be positive.
    pub amount: i64,
    /// Denomination as supplied by the user, canonicalized before use.
    pub denom: String,
    /// Destination port identifier.
    pub port_id: String,
    /// Destination channel identifier.
    pub channel_id: String,
    /// Block height on the counterparty chain after which the transfer
    /// may be reverted. Interpreted by the protocol, not locally.
    pub timeout_height: u64,
}

impl TransferRequest {
    /// Amount as an unsigned on-chain quantity, rejecting non-positive
    /// values before any chain interaction.
    pub fn checked_amount(&self) -> CliResult<U256> {
        if self.amount <= 0 {
            return Err(CliError::Config(format!(
                "amount must be positive, got {}",
                self.amount
            )));
        }
        Ok(U256::from(self.amount as u64))
    }
}

/// One stage of the transfer pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Grant the bank an allowance against the sender's token balance.
    Approve,
    /// Move the token into the bank, crediting the sender's escrow.
    Deposit,
    /// Burn/lock the escrowed balance and emit the cross-chain packet.
    SendTransfer,
}

impl StepKind {
    /// Human-readable label for progress reporting.
    pub fn label(&self) -> &'static str {
        match self {
            StepKind::Approve => "token approve",
            StepKind::Deposit => "deposit",
            StepKind::SendTransfer => "sendTransfer",
        }
    }
}

/// Result of a single attempted step.
#[derive(Debug)]
pub struct StepResult {
    pub step: StepKind,
    pub status: StepStatus,
}

#[derive(Debug)]
pub enum StepStatus {
    Confirmed { tx_hash: H256 },
    Failed { cause: CliError },
}

impl StepResult {
    pub fn is_confirmed(&self) -> bool {
        matches!(self.status, StepStatus::Confirmed { .. })
    }
}

/// Ordered per-step results of a transfer run. The pipeline halts at the
/// first failure; confirmed prior steps are not rolled back, so a partial
/// outcome is a first-class, inspectable state.
#[derive(Debug, Default)]
pub struct TransferOutcome {
    pub steps: Vec<StepResult>,
}

impl TransferOutcome {
    pub fn succeeded(&self) -> bool {
        !self.steps.is_empty() && self.steps.iter().all(StepResult::is_confirmed)
    }

    /// The failed step, if any.
    pub fn failure(&self) -> Option<&StepResult> {
        self.steps.iter().find(|step| !step.is_confirmed())
    }
}

/// Decide the step sequence from the syntactic shape of the canonical
/// denom: a bare contract address means the token is held natively on this
/// chain and must be escrowed first; a port/channel prefix means it arrived
/// via a previous transfer and is already escrowed.
///
/// "Looks like a local contract address" standing in for "is a
/// locally-escrowed token" is a heuristic; it lives behind this single
/// function so it can be swapped for an explicit flag or an on-chain
/// origin query later.
pub fn plan_steps(canonical_denom: &str) -> Vec<StepKind> {
    if is_hex_address(canonical_denom) {
        vec![StepKind::Approve, StepKind::Deposit, StepKind::SendTransfer]
    } else {
        vec![StepKind::SendTransfer]
    }
}
