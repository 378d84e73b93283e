//! Chain gateway: RPC connection and blocking transaction confirmation

use std::sync::Arc;
use std::time::Duration;

use ethers::contract::ContractCall;
use ethers::core::abi::Detokenize;
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Middleware, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{TransactionReceipt, U64};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Provider poll interval for pending transactions.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Signing middleware stack used for every state-changing call.
pub type SignerClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Facade over the RPC endpoint: holds the provider and the chain id
/// queried once at connect time.
pub struct ChainGateway {
    provider: Provider<Http>,
    chain_id: u64,
}

impl ChainGateway {
    /// Connect to an RPC endpoint and query its chain id.
    pub async fn connect(rpc_addr: &str) -> CliResult<Self> {
        let provider = Provider::<Http>::try_from(rpc_addr)
            .map_err(|e| {
                CliError::ChainUnavailable(format!("invalid rpc address {rpc_addr}: {e}"))
            })?
            .interval(POLL_INTERVAL);

        let chain_id = provider
            .get_chainid()
            .await
            .map_err(|e| CliError::ChainUnavailable(e.to_string()))?
            .as_u64();

        debug!(chain_id, rpc_addr, "connected to chain");
        Ok(Self { provider, chain_id })
    }

    /// Read-only provider handle.
    pub fn provider(&self) -> &Provider<Http> {
        &self.provider
    }

    /// Build a signing client for a wallet, bound to this chain's id.
    ///
    /// `SignerMiddleware` fixes the transaction `from` to the wallet's own
    /// address, so a signer never signs on behalf of another account.
    pub fn signer_client(&self, wallet: LocalWallet) -> Arc<SignerClient> {
        Arc::new(SignerMiddleware::new(
            self.provider.clone(),
            wallet.with_chain_id(self.chain_id),
        ))
    }

    /// Latest block number.
    pub async fn block_height(&self) -> CliResult<u64> {
        self.provider
            .get_block_number()
            .await
            .map(|number| number.as_u64())
            .map_err(|e| CliError::ChainUnavailable(e.to_string()))
    }
}

/// Submit a contract call and await its receipt, then classify it.
///
/// A single submission attempt: retry policy belongs to the caller. The
/// wait suspends until the transaction is included and a receipt is
/// available. A receipt with a non-success status becomes
/// `TransactionReverted`; transport-level failures and transactions
/// dropped from the mempool become `ChainUnavailable`.
pub async fn submit_and_confirm<M, D>(call: &ContractCall<M, D>) -> CliResult<TransactionReceipt>
where
    M: Middleware + 'static,
    D: Detokenize,
{
    let pending = match call.send().await {
        Ok(pending) => pending,
        // Revert surfaced at submission (gas estimation), before any
        // transaction hash exists.
        Err(e) if e.is_revert() => {
            return Err(CliError::TransactionReverted { tx_hash: None });
        }
        Err(e) => return Err(CliError::ChainUnavailable(e.to_string())),
    };

    let tx_hash = pending.tx_hash();
    debug!(tx_hash = ?tx_hash, "transaction submitted, awaiting receipt");

    let receipt = pending
        .await
        .map_err(|e| CliError::ChainUnavailable(e.to_string()))?
        .ok_or_else(|| {
            CliError::ChainUnavailable(format!(
                "transaction {tx_hash:#x} dropped before inclusion"
            ))
        })?;

    if receipt.status != Some(U64::from(1)) {
        return Err(CliError::TransactionReverted {
            tx_hash: Some(receipt.transaction_hash),
        });
    }

    Ok(receipt)
}
