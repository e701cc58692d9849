//! Modules for various EVM functionality.
//!
//! Includes the Ethereum ABI, EIP-1559, EIP-712, and Foundry.
pub mod abi;
pub mod eip1559;
pub mod eip712;
pub mod foundry;
