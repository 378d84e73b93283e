//! Deterministic key derivation from a mnemonic phrase
//!
//! Keys are derived on the standard Ethereum HD path, parameterized only by
//! the account index, and cached for the lifetime of the ring. The ring is
//! an explicit instance owned by the caller rather than process-global
//! state, so tests can construct one per fixed seed.

use std::collections::HashMap;
use std::fmt;

use ethers::signers::{coins_bip39::English, LocalWallet, MnemonicBuilder, Signer};
use ethers::types::Address;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// HD derivation path template, parameterized by the account index.
const HDW_PATH_TEMPLATE: &str = "m/44'/60'/0'/0/";

/// Derives and caches per-index signing keys from a single mnemonic.
pub struct KeyRing {
    mnemonic: String,
    keys: HashMap<u32, LocalWallet>,
}

impl KeyRing {
    /// Create a key ring for a mnemonic phrase.
    ///
    /// The phrase is validated up front by deriving index 0, so a malformed
    /// mnemonic surfaces at startup rather than mid-pipeline.
    pub fn new(mnemonic: &str) -> CliResult<Self> {
        let mut ring = Self {
            mnemonic: mnemonic.trim().to_string(),
            keys: HashMap::new(),
        };
        ring.signer(0)?;
        Ok(ring)
    }

    /// Signer for an account index. Derivation is deterministic; repeated
    /// calls with the same index return the same key.
    pub fn signer(&mut self, index: u32) -> CliResult<LocalWallet> {
        if let Some(wallet) = self.keys.get(&index) {
            return Ok(wallet.clone());
        }

        let path = format!("{HDW_PATH_TEMPLATE}{index}");
        let wallet = MnemonicBuilder::<English>::default()
            .phrase(self.mnemonic.as_str())
            .derivation_path(&path)
            .map_err(|e| CliError::Wallet(format!("invalid derivation path {path}: {e}")))?
            .build()
            .map_err(|e| CliError::Wallet(format!("invalid mnemonic phrase: {e}")))?;

        debug!(index, address = ?wallet.address(), "derived wallet");
        self.keys.insert(index, wallet.clone());
        Ok(wallet)
    }

    /// On-chain address for an account index.
    pub fn address(&mut self, index: u32) -> CliResult<Address> {
        Ok(self.signer(index)?.address())
    }
}

// Manual impl so the mnemonic never reaches logs or panic messages.
impl fmt::Debug for KeyRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyRing")
            .field("mnemonic", &"<redacted>")
            .field("derived", &self.keys.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str =
        "test test test test test test test test test test test junk";

    #[test]
    fn derivation_is_deterministic() {
        let mut ring = KeyRing::new(TEST_MNEMONIC).unwrap();
        let first = ring.address(3).unwrap();
        let second = ring.address(3).unwrap();
        assert_eq!(first, second);

        let mut other = KeyRing::new(TEST_MNEMONIC).unwrap();
        assert_eq!(first, other.address(3).unwrap());
    }

    #[test]
    fn derives_known_address_for_index_zero() {
        // First account of the well-known hardhat test mnemonic.
        let mut ring = KeyRing::new(TEST_MNEMONIC).unwrap();
        let expected: Address = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
            .parse()
            .unwrap();
        assert_eq!(ring.address(0).unwrap(), expected);
    }

    #[test]
    fn distinct_indices_yield_distinct_addresses() {
        let mut ring = KeyRing::new(TEST_MNEMONIC).unwrap();
        assert_ne!(ring.address(0).unwrap(), ring.address(1).unwrap());
    }

    #[test]
    fn malformed_mnemonic_fails_at_construction() {
        let err = KeyRing::new("definitely not a bip39 phrase").unwrap_err();
        assert!(matches!(err, CliError::Wallet(_)));
    }

    #[test]
    fn debug_output_redacts_mnemonic() {
        let ring = KeyRing::new(TEST_MNEMONIC).unwrap();
        let rendered = format!("{ring:?}");
        assert!(!rendered.contains("junk"));
        assert!(rendered.contains("<redacted>"));
    }
}
