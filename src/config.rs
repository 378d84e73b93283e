//! Chain configuration loading
//!
//! Loads a directory of per-chain JSON files (`<config-dir>/chains/*.json`)
//! describing the RPC endpoint and wallet mnemonic for each chain. Files
//! are read in lexicographic order so a chain index is stable across runs.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CliError, CliResult};

/// One chain's configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    pub chain: CoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoreConfig {
    pub rpc_addr: String,
    pub eth_chain_id: i64,
    pub hdw_mnemonic: String,
}

impl ChainConfig {
    fn validate(&self, path: &Path) -> CliResult<()> {
        if self.chain.rpc_addr.is_empty() {
            return Err(CliError::Config(format!(
                "{}: rpc_addr must not be empty",
                path.display()
            )));
        }
        if self.chain.hdw_mnemonic.is_empty() {
            return Err(CliError::Config(format!(
                "{}: hdw_mnemonic must not be empty",
                path.display()
            )));
        }
        Ok(())
    }
}

/// Load every chain config under `<config_dir>/chains`, indexed by file
/// order.
pub fn load_chain_configs(config_dir: &Path) -> CliResult<Vec<ChainConfig>> {
    let chains_dir = config_dir.join("chains");
    let entries = fs::read_dir(&chains_dir).map_err(|e| {
        CliError::Config(format!("failed to read {}: {e}", chains_dir.display()))
    })?;

    let mut paths: Vec<_> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut configs = Vec::with_capacity(paths.len());
    for path in paths {
        let raw = fs::read_to_string(&path)
            .map_err(|e| CliError::Config(format!("failed to read {}: {e}", path.display())))?;
        let config: ChainConfig = serde_json::from_str(&raw)
            .map_err(|e| CliError::Config(format!("failed to parse {}: {e}", path.display())))?;
        config.validate(&path)?;
        configs.push(config);
    }

    Ok(configs)
}

/// Chain config at `chain_index`, erroring on an out-of-range index.
pub fn chain_config_at(config_dir: &Path, chain_index: usize) -> CliResult<ChainConfig> {
    let configs = load_chain_configs(config_dir)?;
    let count = configs.len();
    configs.into_iter().nth(chain_index).ok_or_else(|| {
        CliError::Config(format!(
            "chain index {chain_index} not found ({count} chains configured)"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_chain_file(dir: &Path, name: &str, rpc_addr: &str) {
        let chains = dir.join("chains");
        fs::create_dir_all(&chains).unwrap();
        let body = format!(
            r#"{{
                "chain": {{
                    "rpc_addr": "{rpc_addr}",
                    "eth_chain_id": 2018,
                    "hdw_mnemonic": "math razor capable expose worth grape metal sunset metal sudden usage scheme"
                }},
                "prover": {{ "@type": "mock" }}
            }}"#
        );
        fs::write(chains.join(name), body).unwrap();
    }

    #[test]
    fn loads_chain_configs_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        write_chain_file(dir.path(), "ibc-1.json", "http://localhost:8646");
        write_chain_file(dir.path(), "ibc-0.json", "http://localhost:8645");

        let configs = load_chain_configs(dir.path()).unwrap();
        assert_eq!(configs.len(), 2);
        assert_eq!(configs[0].chain.rpc_addr, "http://localhost:8645");
        assert_eq!(configs[1].chain.rpc_addr, "http://localhost:8646");
        assert_eq!(configs[0].chain.eth_chain_id, 2018);
    }

    #[test]
    fn rejects_empty_rpc_addr() {
        let dir = tempfile::tempdir().unwrap();
        write_chain_file(dir.path(), "ibc-0.json", "");

        let err = load_chain_configs(dir.path()).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn missing_chain_index_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        write_chain_file(dir.path(), "ibc-0.json", "http://localhost:8645");

        assert!(chain_config_at(dir.path(), 0).is_ok());
        let err = chain_config_at(dir.path(), 5).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
