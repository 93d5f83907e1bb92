//! Multi-network transaction lookup.
//!
//! A [`NetworkResolver`] is built once with one fetcher per network and then
//! passed to whoever needs it. Lookups probe the networks strictly in order,
//! one request at a time, and stop at the first network that has the
//! transaction.

use std::sync::Arc;

use sui_explain_types::{InclusionOptions, RawTransactionRecord};
use sui_transport::{JsonRpcClient, Network, TransactionFetcher};
use tracing::{debug, info, warn};

use crate::error::ResolveError;

/// A transaction and the network it was found on.
#[derive(Debug, Clone)]
pub struct ResolvedTransaction {
    pub record: RawTransactionRecord,
    pub network: Network,
}

pub struct NetworkResolver {
    bindings: Vec<(Network, Arc<dyn TransactionFetcher>)>,
}

impl NetworkResolver {
    /// Create a resolver probing `bindings` in the given order.
    pub fn new(bindings: Vec<(Network, Arc<dyn TransactionFetcher>)>) -> Self {
        Self { bindings }
    }

    /// JSON-RPC fullnode fetchers for `order`.
    pub fn fullnodes(order: &[Network]) -> Self {
        let bindings = order
            .iter()
            .map(|&network| {
                let fetcher: Arc<dyn TransactionFetcher> =
                    Arc::new(JsonRpcClient::for_network(network));
                (network, fetcher)
            })
            .collect();
        Self::new(bindings)
    }

    /// Fullnode fetchers in the default mainnet, devnet, testnet order.
    pub fn mainnet_first() -> Self {
        Self::fullnodes(&Network::SEARCH_ORDER)
    }

    /// The probe order.
    pub fn networks(&self) -> Vec<Network> {
        self.bindings.iter().map(|(network, _)| *network).collect()
    }

    /// Find `digest` on the first network that has it.
    ///
    /// Each network gets exactly one attempt. Per-network failures of any
    /// kind (absent, unreachable, undecodable) move the search on to the next
    /// network; only exhausting the list is an error.
    pub async fn find_transaction(&self, digest: &str) -> Result<ResolvedTransaction, ResolveError> {
        for (network, fetcher) in &self.bindings {
            match fetcher
                .fetch_transaction(digest, &InclusionOptions::FULL)
                .await
            {
                Ok(record) => {
                    info!(digest = digest, network = %network, "transaction found");
                    return Ok(ResolvedTransaction {
                        record,
                        network: *network,
                    });
                }
                Err(e) => {
                    debug!(digest = digest, network = %network, error = %e, "not on network");
                }
            }
        }

        let err = ResolveError::NotFoundOnAnyNetwork {
            digest: digest.to_string(),
            networks: self.networks(),
        };
        warn!("{}", err);
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let resolver = NetworkResolver::mainnet_first();
        assert_eq!(
            resolver.networks(),
            vec![Network::Mainnet, Network::Devnet, Network::Testnet]
        );
    }

    #[tokio::test]
    async fn test_empty_order_is_immediately_not_found() {
        let resolver = NetworkResolver::new(vec![]);
        let err = resolver.find_transaction("D1").await.unwrap_err();
        assert_eq!(
            err,
            ResolveError::NotFoundOnAnyNetwork {
                digest: "D1".into(),
                networks: vec![],
            }
        );
    }
}
