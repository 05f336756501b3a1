//! Network labels and the development stub contract.

use crate::{AbiItem, AbiParam};
use alloy_json_abi::StateMutability;

/// Network labels a contract can be tagged with. Purely informational.
pub const NETWORKS: &[&str] = &[
    "Ethereum Mainnet",
    "Sepolia Testnet",
    "Polygon Mainnet",
    "Arbitrum One",
    "Optimism",
    "Base",
    "Avalanche C-Chain",
];

/// Display name given to scanned contracts when none is provided.
pub const DEFAULT_CONTRACT_NAME: &str = "Lensed Artifact";

/// USDT on Ethereum mainnet.
pub const DEMO_ADDRESS: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";

/// A minimal ERC-20 subset: one read function, one write function and one event.
pub fn demo_abi() -> Vec<AbiItem> {
    vec![
        AbiItem::function("balanceOf", StateMutability::View)
            .input(AbiParam::new("account", "address").internal_type("address"))
            .output(AbiParam::new("", "uint256").internal_type("uint256")),
        AbiItem::function("transfer", StateMutability::NonPayable)
            .input(AbiParam::new("recipient", "address").internal_type("address"))
            .input(AbiParam::new("amount", "uint256").internal_type("uint256"))
            .output(AbiParam::new("", "bool").internal_type("bool")),
        AbiItem::event("Transfer")
            .input(AbiParam::new("from", "address").internal_type("address").indexed(true))
            .input(AbiParam::new("to", "address").internal_type("address").indexed(true))
            .input(AbiParam::new("value", "uint256").internal_type("uint256").indexed(false)),
    ]
}
