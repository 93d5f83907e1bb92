//! Sui Transport Layer
//!
//! Network transport for fetching transaction records from Sui fullnodes.
//!
//! This crate provides:
//! - [`network`]: the fixed set of networks and their fullnode endpoints
//! - [`fetcher`]: the [`TransactionFetcher`] capability consumed by resolvers
//! - [`jsonrpc`]: a blocking JSON-RPC client implementing that capability
//!
//! # Example
//!
//! ```ignore
//! use sui_transport::{JsonRpcClient, Network, TransactionFetcher};
//! use sui_explain_types::InclusionOptions;
//!
//! let client = JsonRpcClient::for_network(Network::Testnet);
//! let record = client
//!     .fetch_transaction("4epaeL3kiHkT7sukmBDguao5bKqptHnMtKy8vgpCFteo", &InclusionOptions::FULL)
//!     .await?;
//! ```

pub mod fetcher;
pub mod jsonrpc;
pub mod network;

// Re-export main types for convenience
pub use fetcher::{FetchError, TransactionFetcher};
pub use jsonrpc::JsonRpcClient;
pub use network::Network;
