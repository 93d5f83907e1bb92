use sui_transport::Network;
use thiserror::Error;

/// Failures that cross from the core to its callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Transaction {digest} not found on any network ({})", join_networks(.networks))]
    NotFoundOnAnyNetwork {
        digest: String,
        networks: Vec<Network>,
    },
}

/// The only way summarizing a decoded record can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    #[error("object change #{index} has an unrecognized type tag")]
    UnrecognizedObjectChange { index: usize },
}

/// Anything a search session can report back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplainError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Summary(#[from] SummaryError),
}

fn join_networks(networks: &[Network]) -> String {
    networks
        .iter()
        .map(|n| n.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
