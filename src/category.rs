use std::fmt;

use serde::{Serialize, Serializer};

use crate::changes::Transfer;
use crate::summary::CallInvocation;

const SWAP_KEYWORDS: &[&str] = &["swap", "exchange", "trade"];
const NFT_KEYWORDS: &[&str] = &["nft", "collectible", "token"];
const MINT_KEYWORDS: &[&str] = &["mint", "create"];

/// Coarse purpose of a transaction.
///
/// This is a naming heuristic, not a verifier: a contract that swaps under a
/// function called `rebalance` is labeled by what it calls, not what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionCategory {
    TokenSwap,
    NftTransfer,
    Minting,
    AssetTransfer,
    ContractInteraction,
    ObjectCreation,
    Generic,
}

impl TransactionCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionCategory::TokenSwap => "Token Swap",
            TransactionCategory::NftTransfer => "NFT Transfer",
            TransactionCategory::Minting => "Token/Object Minting",
            TransactionCategory::AssetTransfer => "Asset Transfer",
            TransactionCategory::ContractInteraction => "Smart Contract Interaction",
            TransactionCategory::ObjectCreation => "Object Creation",
            TransactionCategory::Generic => "Generic Transaction",
        }
    }
}

impl fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for TransactionCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    let lower = haystack.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

/// Assign exactly one category. Rules are checked in order and the first
/// match wins, so a swap that also creates objects is still a swap.
pub fn classify_transaction(
    calls: &[CallInvocation],
    transfers: &[Transfer],
    created: usize,
) -> TransactionCategory {
    let is_swap = calls.iter().any(|c| {
        contains_any(&c.function, SWAP_KEYWORDS) || contains_any(&c.module, SWAP_KEYWORDS)
    });
    if is_swap {
        return TransactionCategory::TokenSwap;
    }

    let moves_nft = transfers
        .iter()
        .any(|t| contains_any(&t.object_type, NFT_KEYWORDS));
    if moves_nft && !transfers.is_empty() {
        return TransactionCategory::NftTransfer;
    }

    let mints = calls
        .iter()
        .any(|c| contains_any(&c.function, MINT_KEYWORDS));
    if mints || created > 0 {
        return TransactionCategory::Minting;
    }

    if !transfers.is_empty() {
        return TransactionCategory::AssetTransfer;
    }
    if !calls.is_empty() {
        return TransactionCategory::ContractInteraction;
    }
    if created > 0 {
        return TransactionCategory::ObjectCreation;
    }
    TransactionCategory::Generic
}
