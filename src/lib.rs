//! Sui Transaction Explainer
//!
//! Find a transaction on whichever Sui network has it and turn the node's
//! deeply nested response into a short, human-readable summary:
//!
//! - **Resolution**: [`resolver::NetworkResolver`] probes networks in order
//!   and returns the first hit
//! - **Summarization**: [`summary::build_summary`] classifies object and
//!   balance changes, narrates them, and assigns a [`category::TransactionCategory`]
//! - **Sessions**: [`session::SearchSession`] keeps only the newest search
//!   when several overlap
//!
//! See [`explain`] for the one-call path from digest to summary.

pub mod args;
pub mod catalog;
pub mod category;
pub mod changes;
pub mod digest;
pub mod error;
pub mod format;
pub mod narrate;
pub mod output;
pub mod resolver;
pub mod session;
pub mod summary;

pub use error::{ExplainError, ResolveError, SummaryError};
pub use resolver::{NetworkResolver, ResolvedTransaction};
pub use summary::{build_summary, TransactionSummary};

/// Resolve `digest` across the resolver's networks and summarize it.
pub async fn explain(
    resolver: &NetworkResolver,
    digest: &str,
) -> Result<TransactionSummary, ExplainError> {
    let resolved = resolver.find_transaction(digest).await?;
    Ok(build_summary(&resolved.record, resolved.network)?)
}
