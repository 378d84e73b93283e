//! Contract bindings for the ICS20 transfer pipeline
//!
//! Human-readable ABI fragments for the three contracts the CLI touches:
//! the ERC20 token being escrowed, the ICS20 bank holding escrowed
//! balances keyed by (account, denom), and the ICS20 transfer bank that
//! burns/locks the escrowed balance and emits the cross-chain packet.
//!
//! Each binding lives in its own module: ERC20 and the bank both expose a
//! `balanceOf`, and the generated call types would collide otherwise.

pub use erc20::Erc20;
pub use ics20_bank::Ics20Bank;
pub use ics20_transfer_bank::Ics20TransferBank;

mod erc20 {
    use ethers::contract::abigen;

    abigen!(
        Erc20,
        r#"[
            function approve(address spender, uint256 amount) external returns (bool)
            function transfer(address to, uint256 amount) external returns (bool)
            function balanceOf(address account) external view returns (uint256)
        ]"#
    );
}

mod ics20_bank {
    use ethers::contract::abigen;

    abigen!(
        Ics20Bank,
        r#"[
            function deposit(address tokenContract, uint256 amount, address receiver) external
            function balanceOf(address account, string denom) external view returns (uint256)
        ]"#
    );
}

mod ics20_transfer_bank {
    use ethers::contract::abigen;

    abigen!(
        Ics20TransferBank,
        r#"[
            function sendTransfer(string denom, uint256 amount, string receiver, string sourcePort, string sourceChannel, uint64 timeoutHeight) external
        ]"#
    );
}
