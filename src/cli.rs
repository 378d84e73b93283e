//! Command-line surface
//!
//! Subcommand tree mirroring the tool's four surfaces: wallet address
//! derivation, chain info, plain ERC20 operations, and the ICS20 escrow
//! and transfer pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ics20-cli",
    version,
    about = "Command line tool for ICS20 token transfers on Ethereum-compatible chains"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Wallet address derivation
    Wallet {
        #[command(subcommand)]
        command: WalletCommand,
    },
    /// Chain info
    Chain {
        #[command(subcommand)]
        command: ChainCommand,
    },
    /// ERC20 token operations
    Erc20 {
        #[command(subcommand)]
        command: Erc20Command,
    },
    /// ICS20 escrow and cross-chain transfer operations
    Ics20 {
        #[command(subcommand)]
        command: Ics20Command,
    },
}

#[derive(Subcommand)]
pub enum WalletCommand {
    /// Print the address derived for a wallet index
    Address {
        /// Directory holding chain config files under `chains/`
        config_dir: PathBuf,
        /// Index of the chain config to use
        chain_index: usize,
        /// Derivation index of the wallet
        wallet_index: u32,
    },
}

#[derive(Subcommand)]
pub enum ChainCommand {
    /// Print the current height of the blockchain
    Height {
        /// Ethereum RPC address
        rpc_address: String,
    },
}

#[derive(Subcommand)]
pub enum Erc20Command {
    /// ERC20 balance of an account
    Balance {
        /// Ethereum RPC address
        #[arg(long)]
        rpc_address: String,
        /// Wallet address
        #[arg(long)]
        wallet_address: String,
        /// Token contract address
        #[arg(long)]
        token_address: String,
    },
    /// Transfer ERC20 tokens between accounts on this chain
    Transfer {
        /// Ethereum RPC address
        #[arg(long)]
        rpc_address: String,
        /// Mnemonic phrase
        #[arg(long)]
        mnemonic: String,
        /// Derivation index of the sending wallet
        #[arg(long)]
        from_index: u32,
        /// Address of the recipient
        #[arg(long)]
        to_address: String,
        /// Amount of the token
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
        amount: i64,
        /// Token contract address
        #[arg(long)]
        token_address: String,
    },
}

#[derive(Subcommand)]
pub enum Ics20Command {
    /// Escrowed balance of an account for a denom
    Balance {
        /// Ethereum RPC address
        #[arg(long)]
        rpc_address: String,
        /// ICS20 bank contract address
        #[arg(long)]
        ics20_bank_address: String,
        /// Wallet address
        #[arg(long)]
        wallet_address: String,
        /// Token denom
        #[arg(long)]
        denom: String,
    },
    /// Transfer tokens to another chain's account
    Transfer {
        /// Ethereum RPC address
        #[arg(long)]
        rpc_address: String,
        /// Mnemonic phrase
        #[arg(long)]
        mnemonic: String,
        /// ICS20 bank contract address
        #[arg(long)]
        ics20_bank_address: String,
        /// ICS20 transfer bank contract address
        #[arg(long)]
        ics20_transfer_bank_address: String,
        /// Derivation index of the sending wallet
        #[arg(long)]
        from_index: u32,
        /// Address of the recipient on the counterparty chain
        #[arg(long)]
        to_address: String,
        /// Amount of the token
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
        amount: i64,
        /// Token denom
        #[arg(long)]
        denom: String,
        /// Destination port id
        #[arg(long)]
        port_id: String,
        /// Destination channel id
        #[arg(long)]
        channel_id: String,
        /// Timeout height on the counterparty chain
        #[arg(long)]
        timeout_height: u64,
    },
}
