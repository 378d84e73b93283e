//! Step execution against the deployed contracts

use async_trait::async_trait;
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Address, H256};

use super::{StepKind, TransferRequest};
use crate::chain::{submit_and_confirm, ChainGateway, SignerClient};
use crate::contracts::{Erc20, Ics20Bank, Ics20TransferBank};
use crate::denom::is_hex_address;
use crate::error::{CliError, CliResult};

/// Executes a single pipeline step and returns the confirmed transaction
/// hash. Seam between the orchestrator's sequencing logic and the chain.
#[async_trait]
pub trait StepExecutor {
    async fn execute(
        &self,
        step: StepKind,
        req: &TransferRequest,
        canonical_denom: &str,
    ) -> CliResult<H256>;
}

/// Production executor holding the bound contracts. Every call is signed
/// by the sender's wallet and confirmed through the gateway before the
/// result is returned.
pub struct ContractExecutor {
    sender: Address,
    bank_address: Address,
    /// Token contract, bound only when the denom is a local address.
    token: Option<(Address, Erc20<SignerClient>)>,
    bank: Ics20Bank<SignerClient>,
    transfer_bank: Ics20TransferBank<SignerClient>,
}

impl ContractExecutor {
    /// Bind the contracts for one transfer run.
    pub fn new(
        gateway: &ChainGateway,
        wallet: LocalWallet,
        canonical_denom: &str,
        bank_address: Address,
        transfer_bank_address: Address,
    ) -> CliResult<Self> {
        let sender = wallet.address();
        let client = gateway.signer_client(wallet);

        let token = if is_hex_address(canonical_denom) {
            let token_address: Address = canonical_denom
                .parse()
                .map_err(|e| CliError::Config(format!("invalid token address: {e}")))?;
            Some((token_address, Erc20::new(token_address, client.clone())))
        } else {
            None
        };

        Ok(Self {
            sender,
            bank_address,
            token,
            bank: Ics20Bank::new(bank_address, client.clone()),
            transfer_bank: Ics20TransferBank::new(transfer_bank_address, client),
        })
    }
}

#[async_trait]
impl StepExecutor for ContractExecutor {
    async fn execute(
        &self,
        step: StepKind,
        req: &TransferRequest,
        canonical_denom: &str,
    ) -> CliResult<H256> {
        let amount = req.checked_amount()?;

        let receipt = match step {
            StepKind::Approve => {
                let (_, token) = self.token.as_ref().ok_or_else(|| {
                    CliError::Config(format!(
                        "no token contract bound for denom {canonical_denom}"
                    ))
                })?;
                let call = token.approve(self.bank_address, amount);
                submit_and_confirm(&call).await?
            }
            StepKind::Deposit => {
                let (token_address, _) = self.token.as_ref().ok_or_else(|| {
                    CliError::Config(format!(
                        "no token contract bound for denom {canonical_denom}"
                    ))
                })?;
                // Beneficiary is the sender's own escrowed balance.
                let call = self.bank.deposit(*token_address, amount, self.sender);
                submit_and_confirm(&call).await?
            }
            StepKind::SendTransfer => {
                let call = self.transfer_bank.send_transfer(
                    canonical_denom.to_string(),
                    amount,
                    req.to_address.clone(),
                    req.port_id.clone(),
                    req.channel_id.clone(),
                    req.timeout_height,
                );
                submit_and_confirm(&call).await?
            }
        };

        Ok(receipt.transaction_hash)
    }
}
