//! Shared types for the sui-tx-explain workspace.
//!
//! This crate models the transaction record returned by a Sui fullnode's
//! `sui_getTransactionBlock` JSON-RPC method, so the transport and the
//! summarization engine agree on one shape without depending on each other.
//!
//! ## Record Types
//!
//! The [`record`] module contains:
//! - [`RawTransactionRecord`](record::RawTransactionRecord) - the full response body
//! - [`ObjectChange`](record::ObjectChange) - tagged object lifecycle entries
//! - [`BalanceChange`](record::BalanceChange) - per-owner coin deltas
//! - [`Owner`](record::Owner) - ownership descriptors

pub mod record;

pub use record::{
    BalanceChange, CallArgument, ExecutionStatus, GasCostSummary, GasData, InclusionOptions,
    MoveCallCommand, ObjectChange, Owner, ProgrammableTransaction, RawTransactionRecord,
    TransactionBlock, TransactionCommand, TransactionData, TransactionEffects, TransactionKind,
};

/// Number of decimal places of the native SUI coin (1 SUI = 10^9 MIST).
pub const SUI_DECIMALS: u32 = 9;

/// Base units per whole SUI.
pub const MIST_PER_SUI: u64 = 1_000_000_000;
