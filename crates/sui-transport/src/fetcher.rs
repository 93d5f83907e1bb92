//! Transaction fetch capability.
//!
//! Resolvers depend on this trait rather than on a concrete client, so the
//! network search can be driven by fullnodes, fixtures, or mocks alike.

use sui_explain_types::{InclusionOptions, RawTransactionRecord};
use thiserror::Error;

/// Why a single fetch against a single network failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transaction {0} not found")]
    NotFound(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Fetch a transaction record by digest from one network.
#[async_trait::async_trait]
pub trait TransactionFetcher: Send + Sync {
    async fn fetch_transaction(
        &self,
        digest: &str,
        options: &InclusionOptions,
    ) -> Result<RawTransactionRecord, FetchError>;
}
