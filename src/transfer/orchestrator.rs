//! Sequential transfer orchestration
//!
//! Canonicalizes the denom, plans the step sequence, and executes it
//! strictly in order: each step must confirm on-chain before the next is
//! submitted, because the deposit depends on the approve's allowance being
//! visible and the send depends on the deposit's escrow credit.

use tracing::{error, info};

use super::{plan_steps, StepExecutor, StepResult, StepStatus, TransferOutcome, TransferRequest};
use crate::denom::canonicalize_denom;
use crate::error::CliResult;

/// Drives a `TransferRequest` through its step pipeline.
pub struct Orchestrator<E: StepExecutor> {
    executor: E,
}

impl<E: StepExecutor> Orchestrator<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Execute a transfer and return one result entry per attempted step.
    ///
    /// An invalid denom or amount fails fast before any chain interaction.
    /// The first failed step halts the pipeline; confirmed prior steps are
    /// not rolled back (there is no compensation logic), so the caller can
    /// inspect exactly which steps completed.
    pub async fn execute_transfer(&self, req: &TransferRequest) -> CliResult<TransferOutcome> {
        let canonical_denom = canonicalize_denom(&req.denom)?;
        req.checked_amount()?;

        let plan = plan_steps(&canonical_denom);
        let mut outcome = TransferOutcome::default();

        for (position, step) in plan.into_iter().enumerate() {
            match self.executor.execute(step, req, &canonical_denom).await {
                Ok(tx_hash) => {
                    info!(
                        "{}. {} success (TxHash: {:#x})",
                        position + 1,
                        step.label(),
                        tx_hash
                    );
                    outcome.steps.push(StepResult {
                        step,
                        status: StepStatus::Confirmed { tx_hash },
                    });
                }
                Err(cause) => {
                    error!("{} failed: {}", step.label(), cause);
                    outcome.steps.push(StepResult {
                        step,
                        status: StepStatus::Failed { cause },
                    });
                    break;
                }
            }
        }

        Ok(outcome)
    }
}
