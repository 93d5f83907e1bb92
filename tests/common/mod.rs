//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::{json, Value};
use sui_explain_types::{InclusionOptions, RawTransactionRecord};
use sui_transport::{FetchError, TransactionFetcher};
use tokio::sync::Notify;

pub const SENDER: &str = "0xabcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789";
pub const RECIPIENT: &str = "0xAB00000000000000000000000000000000000000000000000000000000000001";

/// Lets a test hold a fetch open until it chooses to release it.
#[derive(Default)]
pub struct Gate {
    pub entered: Notify,
    pub release: Notify,
}

/// In-memory fetcher for one network.
#[derive(Default)]
pub struct MockFetcher {
    records: HashMap<String, RawTransactionRecord>,
    gates: HashMap<String, Arc<Gate>>,
    transport_failure: bool,
    probes: AtomicUsize,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, record: RawTransactionRecord) -> Self {
        self.records.insert(record.digest.clone(), record);
        self
    }

    /// Hold fetches of `digest` until the gate is released.
    pub fn with_gate(mut self, digest: &str, gate: Arc<Gate>) -> Self {
        self.gates.insert(digest.to_string(), gate);
        self
    }

    /// Fail every fetch as if the node were unreachable.
    pub fn unreachable(mut self) -> Self {
        self.transport_failure = true;
        self
    }

    pub fn probes(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TransactionFetcher for MockFetcher {
    async fn fetch_transaction(
        &self,
        digest: &str,
        options: &InclusionOptions,
    ) -> Result<RawTransactionRecord, FetchError> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        assert_eq!(*options, InclusionOptions::FULL, "resolver must request every section");

        if let Some(gate) = self.gates.get(digest) {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
        if self.transport_failure {
            return Err(FetchError::Transport("connection refused".into()));
        }
        self.records
            .get(digest)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(digest.to_string()))
    }
}

pub fn record(value: Value) -> RawTransactionRecord {
    serde_json::from_value(value).expect("fixture should decode")
}

/// Minimal successful record with the given digest.
pub fn simple_record(digest: &str) -> RawTransactionRecord {
    record(json!({
        "digest": digest,
        "effects": {"status": {"status": "success"}, "executedEpoch": "7"}
    }))
}

/// Successful swap: one transferred coin and one `swap::execute` call.
pub fn swap_record(digest: &str) -> Value {
    json!({
        "digest": digest,
        "transaction": {
            "data": {
                "messageVersion": "v1",
                "transaction": {
                    "kind": "ProgrammableTransaction",
                    "inputs": [{"type": "pure", "valueType": "u64", "value": "100"}],
                    "transactions": [
                        {"MoveCall": {
                            "package": "0xpkg",
                            "module": "swap",
                            "function": "execute",
                            "arguments": ["GasCoin", {"Input": 0}]
                        }}
                    ]
                },
                "sender": SENDER,
                "gasData": {"payment": [], "owner": SENDER, "price": "750", "budget": "50000000"}
            },
            "txSignatures": []
        },
        "effects": {
            "messageVersion": "v1",
            "status": {"status": "success"},
            "executedEpoch": "601",
            "gasUsed": {
                "computationCost": "750000",
                "storageCost": "1976000",
                "storageRebate": "978120",
                "nonRefundableStorageFee": "9880"
            },
            "transactionDigest": digest
        },
        "events": [],
        "objectChanges": [
            {
                "type": "transferred",
                "sender": SENDER,
                "recipient": {"AddressOwner": RECIPIENT},
                "objectType": "pkg::mod::Coin",
                "objectId": "0x5",
                "version": "12",
                "digest": "obj"
            }
        ],
        "balanceChanges": []
    })
}
