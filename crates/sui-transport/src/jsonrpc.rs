//! JSON-RPC client for Sui fullnodes.
//!
//! Only the one method needed to explain transactions is wrapped:
//! `sui_getTransactionBlock`. Requests are blocking (`ureq`); the async
//! [`TransactionFetcher`] impl moves them onto the blocking thread pool.
//!
//! ## Endpoints
//! - Mainnet: `https://fullnode.mainnet.sui.io:443`
//! - Devnet: `https://fullnode.devnet.sui.io:443`
//! - Testnet: `https://fullnode.testnet.sui.io:443`
//!
//! ## Timeouts
//! `SUI_RPC_TIMEOUT_SECS` and `SUI_RPC_CONNECT_TIMEOUT_SECS` override the
//! defaults below. This layer never retries.

use std::time::Duration;

use serde_json::{json, Value};
use sui_explain_types::{InclusionOptions, RawTransactionRecord};
use tracing::debug;

use crate::fetcher::{FetchError, TransactionFetcher};
use crate::network::Network;

const GET_TRANSACTION_BLOCK: &str = "sui_getTransactionBlock";

/// JSON-RPC client bound to a single fullnode endpoint.
#[derive(Clone)]
pub struct JsonRpcClient {
    endpoint: String,
    agent: ureq::Agent,
}

impl JsonRpcClient {
    /// Default request timeout in seconds (can be overridden by env).
    const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Default connect timeout in seconds (can be overridden by env).
    const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

    fn default_timeouts() -> (Duration, Duration) {
        let timeout_secs = std::env::var("SUI_RPC_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(Self::DEFAULT_TIMEOUT_SECS);
        let connect_secs = std::env::var("SUI_RPC_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(Self::DEFAULT_CONNECT_TIMEOUT_SECS);
        (
            Duration::from_secs(timeout_secs),
            Duration::from_secs(connect_secs),
        )
    }

    fn build_agent(timeout: Duration, connect_timeout: Duration) -> ureq::Agent {
        ureq::AgentBuilder::new()
            .timeout(timeout)
            .timeout_connect(connect_timeout)
            .build()
    }

    /// Create a client for a network's fullnode (env overrides apply).
    pub fn for_network(network: Network) -> Self {
        Self::new(&network.fullnode_url())
    }

    /// Create a client with a custom endpoint.
    pub fn new(endpoint: &str) -> Self {
        let (timeout, connect_timeout) = Self::default_timeouts();
        Self::with_timeouts(endpoint, timeout, connect_timeout)
    }

    /// Create a client with explicit timeouts.
    pub fn with_timeouts(endpoint: &str, timeout: Duration, connect_timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            agent: Self::build_agent(timeout, connect_timeout),
        }
    }

    fn call(&self, method: &str, params: Value) -> Result<Value, FetchError> {
        let body = request_body(method, params);

        let response: Value = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_json(&body)
            .map_err(|e| FetchError::Transport(format!("{} request failed: {}", method, e)))?
            .into_json()
            .map_err(|e| FetchError::Malformed(format!("unreadable {} response: {}", method, e)))?;

        if let Some(error) = response.get("error") {
            let message = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown error");
            return Err(FetchError::Transport(message.to_string()));
        }

        response
            .get("result")
            .cloned()
            .ok_or_else(|| FetchError::Malformed(format!("no result in {} response", method)))
    }

    /// Fetch a transaction block (blocking).
    pub fn get_transaction_block(
        &self,
        digest: &str,
        options: &InclusionOptions,
    ) -> Result<RawTransactionRecord, FetchError> {
        let params = json!([digest, options]);
        let result = self
            .call(GET_TRANSACTION_BLOCK, params)
            .map_err(|e| classify_not_found(digest, e))?;
        serde_json::from_value(result)
            .map_err(|e| FetchError::Malformed(format!("transaction {}: {}", digest, e)))
    }
}

fn request_body(method: &str, params: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": method,
        "params": params,
    })
}

/// Fullnodes report a missing digest as an ordinary RPC error; recognize it
/// by message so callers can tell absence from outage.
fn classify_not_found(digest: &str, error: FetchError) -> FetchError {
    match error {
        FetchError::Transport(message) => {
            let lower = message.to_lowercase();
            if lower.contains("could not find") || lower.contains("not found") {
                FetchError::NotFound(digest.to_string())
            } else {
                FetchError::Transport(message)
            }
        }
        other => other,
    }
}

#[async_trait::async_trait]
impl TransactionFetcher for JsonRpcClient {
    async fn fetch_transaction(
        &self,
        digest: &str,
        options: &InclusionOptions,
    ) -> Result<RawTransactionRecord, FetchError> {
        let client = self.clone();
        let digest_owned = digest.to_string();
        let options = *options;
        debug!(endpoint = %self.endpoint, digest = digest, "fetching transaction block");
        tokio::task::spawn_blocking(move || client.get_transaction_block(&digest_owned, &options))
            .await
            .map_err(|e| FetchError::Transport(format!("fetch task failed: {}", e)))?
    }
}
