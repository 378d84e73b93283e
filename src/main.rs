//! ICS20 CLI - cross-chain token transfers on Ethereum-compatible chains
//!
//! Drives the approve → deposit → sendTransfer pipeline against the ICS20
//! bank contracts, plus the read-only queries around it. One command per
//! process run; every error surfaces as a nonzero exit.

use anyhow::Result;
use clap::Parser;
use ethers::types::{Address, U256};
use ethers::utils::to_checksum;
use tracing::{debug, info};

mod chain;
mod cli;
mod config;
mod contracts;
mod denom;
mod error;
mod query;
mod transfer;
mod wallet;

use chain::{submit_and_confirm, ChainGateway};
use cli::{ChainCommand, Cli, Command, Erc20Command, Ics20Command, WalletCommand};
use contracts::Erc20;
use error::{CliError, CliResult};
use transfer::{ContractExecutor, Orchestrator, StepStatus, TransferRequest};
use wallet::KeyRing;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Command::Wallet { command } => run_wallet(command).await,
        Command::Chain { command } => run_chain(command).await,
        Command::Erc20 { command } => run_erc20(command).await,
        Command::Ics20 { command } => run_ics20(command).await,
    }
}

async fn run_wallet(command: WalletCommand) -> Result<()> {
    match command {
        WalletCommand::Address {
            config_dir,
            chain_index,
            wallet_index,
        } => {
            let config = config::chain_config_at(&config_dir, chain_index)?;
            debug!(eth_chain_id = config.chain.eth_chain_id, "loaded chain config");
            let mut ring = KeyRing::new(&config.chain.hdw_mnemonic)?;
            let address = ring.address(wallet_index)?;
            println!("{}", to_checksum(&address, None));
        }
    }
    Ok(())
}

async fn run_chain(command: ChainCommand) -> Result<()> {
    match command {
        ChainCommand::Height { rpc_address } => {
            let gateway = ChainGateway::connect(&rpc_address).await?;
            println!("{}", gateway.block_height().await?);
        }
    }
    Ok(())
}

async fn run_erc20(command: Erc20Command) -> Result<()> {
    match command {
        Erc20Command::Balance {
            rpc_address,
            wallet_address,
            token_address,
        } => {
            let gateway = ChainGateway::connect(&rpc_address).await?;
            let balance = query::erc20_balance(
                &gateway,
                parse_address("token address", &token_address)?,
                parse_address("wallet address", &wallet_address)?,
            )
            .await?;
            println!("{balance}");
        }
        Erc20Command::Transfer {
            rpc_address,
            mnemonic,
            from_index,
            to_address,
            amount,
            token_address,
        } => {
            let mut ring = KeyRing::new(&mnemonic)?;
            let gateway = ChainGateway::connect(&rpc_address).await?;
            let client = gateway.signer_client(ring.signer(from_index)?);

            let token = Erc20::new(parse_address("token address", &token_address)?, client);
            let call = token.transfer(
                parse_address("recipient address", &to_address)?,
                U256::from(amount as u64),
            );
            let receipt = submit_and_confirm(&call).await?;
            info!(
                "ERC20 token transfer success (TxHash: {:#x})",
                receipt.transaction_hash
            );
        }
    }
    Ok(())
}

async fn run_ics20(command: Ics20Command) -> Result<()> {
    match command {
        Ics20Command::Balance {
            rpc_address,
            ics20_bank_address,
            wallet_address,
            denom,
        } => {
            let gateway = ChainGateway::connect(&rpc_address).await?;
            let balance = query::ics20_balance(
                &gateway,
                parse_address("ics20 bank address", &ics20_bank_address)?,
                parse_address("wallet address", &wallet_address)?,
                &denom,
            )
            .await?;
            println!("{balance}");
        }
        Ics20Command::Transfer {
            rpc_address,
            mnemonic,
            ics20_bank_address,
            ics20_transfer_bank_address,
            from_index,
            to_address,
            amount,
            denom,
            port_id,
            channel_id,
            timeout_height,
        } => {
            let request = TransferRequest {
                from_index,
                to_address,
                amount,
                denom,
                port_id,
                channel_id,
                timeout_height,
            };

            // Fail on a bad denom before touching the keyring or the chain.
            let canonical_denom = denom::canonicalize_denom(&request.denom)?;

            let mut ring = KeyRing::new(&mnemonic)?;
            let gateway = ChainGateway::connect(&rpc_address).await?;
            let executor = ContractExecutor::new(
                &gateway,
                ring.signer(request.from_index)?,
                &canonical_denom,
                parse_address("ics20 bank address", &ics20_bank_address)?,
                parse_address("ics20 transfer bank address", &ics20_transfer_bank_address)?,
            )?;

            let outcome = Orchestrator::new(executor)
                .execute_transfer(&request)
                .await?;
            if !outcome.succeeded() {
                if let Some(failed) = outcome.failure() {
                    if let StepStatus::Failed { cause } = &failed.status {
                        anyhow::bail!("{} step failed: {}", failed.step.label(), cause);
                    }
                }
                anyhow::bail!("transfer did not complete");
            }
        }
    }
    Ok(())
}

fn parse_address(label: &str, value: &str) -> CliResult<Address> {
    value
        .parse()
        .map_err(|e| CliError::Config(format!("invalid {label} {value}: {e}")))
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}
