//! Read-only balance queries
//!
//! No signer and no ordering constraints; results reflect the latest
//! confirmed chain state at call time.

use std::sync::Arc;

use ethers::types::{Address, U256};

use crate::chain::ChainGateway;
use crate::contracts::{Erc20, Ics20Bank};
use crate::denom::canonicalize_denom;
use crate::error::{CliError, CliResult};

/// Escrowed balance of `account` for `denom` in the ICS20 bank.
///
/// The denom is canonicalized before the lookup in every path: the bank
/// keys balances by the canonical string, so an un-normalized query would
/// silently read the wrong balance bucket.
pub async fn ics20_balance(
    gateway: &ChainGateway,
    bank_address: Address,
    account: Address,
    denom: &str,
) -> CliResult<U256> {
    let canonical_denom = canonicalize_denom(denom)?;
    let bank = Ics20Bank::new(bank_address, Arc::new(gateway.provider().clone()));
    bank.balance_of(account, canonical_denom)
        .call()
        .await
        .map_err(|e| CliError::ChainUnavailable(e.to_string()))
}

/// ERC20 balance of `account` at the token contract.
pub async fn erc20_balance(
    gateway: &ChainGateway,
    token_address: Address,
    account: Address,
) -> CliResult<U256> {
    let token = Erc20::new(token_address, Arc::new(gateway.provider().clone()));
    token
        .balance_of(account)
        .call()
        .await
        .map_err(|e| CliError::ChainUnavailable(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Balance lookups share the canonicalizer with the transfer path, so
    // mixed-case and canonical inputs resolve to the same bucket key.
    #[test]
    fn balance_lookup_key_is_canonical_in_all_paths() {
        let raw = "0x4639F884305273E856dBa51AF60c10a5b5E0F482";
        let canonical = canonicalize_denom(raw).unwrap();
        assert_eq!(canonicalize_denom(&canonical).unwrap(), canonical);
        assert_eq!(canonical, raw.to_ascii_lowercase());
    }
}
