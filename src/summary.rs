//! Build the normalized [`TransactionSummary`] for a resolved transaction.
//!
//! Summarizing is pure: the same record and network always produce the same
//! summary. Missing fields fall back to documented defaults (`Unknown` for
//! sender and epoch, zero for gas figures) instead of failing.

use serde::Serialize;
use sui_explain_types::{CallArgument, RawTransactionRecord, TransactionCommand};
use sui_transport::Network;
use tracing::debug;

use crate::category::{classify_transaction, TransactionCategory};
use crate::changes::{classify_changes, Publish};
use crate::error::SummaryError;
use crate::format::mist_to_sui;
use crate::narrate::narrate;

const UNKNOWN: &str = "Unknown";

/// A Move call executed by a programmable transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallInvocation {
    pub package: String,
    pub module: String,
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<CallArgument>,
}

/// Move calls of a programmable transaction, in command order.
pub fn extract_calls(record: &RawTransactionRecord) -> Vec<CallInvocation> {
    record
        .commands()
        .iter()
        .filter_map(|command| match command {
            TransactionCommand::MoveCall(call) => Some(CallInvocation {
                package: call.package.clone(),
                module: call.module.clone(),
                function: call.function.clone(),
                type_arguments: call.type_arguments.clone(),
                arguments: call.arguments.clone(),
            }),
            _ => None,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Success,
    Failure,
}

/// Gas accounting in SUI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GasBreakdown {
    pub budget: f64,
    pub price: f64,
    pub computation: f64,
    pub storage: f64,
    pub non_refundable: f64,
    pub rebate: f64,
    /// `computation + storage - rebate - price`, as the node's explorer
    /// convention computes it. Note `price` is the unit price, not a cost.
    pub net_used: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ObjectCounts {
    pub created: usize,
    pub mutated: usize,
    pub deleted: usize,
}

/// Everything a renderer needs to explain one transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionSummary {
    pub digest: String,
    pub network: Network,
    pub status: TransactionStatus,
    /// Execution error reported by the node, for failed transactions.
    pub error: Option<String>,
    pub sender: String,
    pub epoch: String,
    pub gas: GasBreakdown,
    pub objects: ObjectCounts,
    pub published: Vec<Publish>,
    pub actions: Vec<String>,
    pub category: TransactionCategory,
    /// The record the summary was built from, for passthrough display.
    pub transaction: RawTransactionRecord,
}

fn gas_breakdown(record: &RawTransactionRecord) -> GasBreakdown {
    let gas_data = record.gas_data();
    let used = record
        .effects
        .as_ref()
        .map(|e| e.gas_used)
        .unwrap_or_default();

    let budget = mist_to_sui(gas_data.and_then(|g| g.budget).unwrap_or(0));
    let price = mist_to_sui(gas_data.and_then(|g| g.price).unwrap_or(0));
    let computation = mist_to_sui(used.computation_cost);
    let storage = mist_to_sui(used.storage_cost);
    let non_refundable = mist_to_sui(used.non_refundable_storage_fee);
    let rebate = mist_to_sui(used.storage_rebate);

    GasBreakdown {
        budget,
        price,
        computation,
        storage,
        non_refundable,
        rebate,
        net_used: computation + storage - rebate - price,
    }
}

/// Summarize a raw record found on `network`.
pub fn build_summary(
    record: &RawTransactionRecord,
    network: Network,
) -> Result<TransactionSummary, SummaryError> {
    let classified = classify_changes(&record.object_changes, &record.balance_changes)?;
    let calls = extract_calls(record);
    let actions = narrate(&classified, &calls);
    let category = classify_transaction(&calls, &classified.transfers, classified.created);
    debug!(
        digest = %record.digest,
        object_changes = classified.object_change_count(),
        calls = calls.len(),
        category = %category,
        "summarized transaction"
    );

    let status_field = record.effects.as_ref().map(|e| &e.status);
    let status = match status_field {
        Some(s) if s.status == "success" => TransactionStatus::Success,
        _ => TransactionStatus::Failure,
    };

    Ok(TransactionSummary {
        digest: record.digest.clone(),
        network,
        status,
        error: status_field.and_then(|s| s.error.clone()),
        sender: record.sender().unwrap_or(UNKNOWN).to_string(),
        epoch: record
            .effects
            .as_ref()
            .and_then(|e| e.executed_epoch)
            .map(|epoch| epoch.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        gas: gas_breakdown(record),
        objects: ObjectCounts {
            created: classified.created,
            mutated: classified.mutated,
            deleted: classified.deleted,
        },
        published: classified.published,
        actions,
        category,
        transaction: record.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> RawTransactionRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let summary = build_summary(&record(json!({"digest": "D1"})), Network::Devnet).unwrap();
        assert_eq!(summary.status, TransactionStatus::Failure);
        assert_eq!(summary.sender, "Unknown");
        assert_eq!(summary.epoch, "Unknown");
        assert_eq!(summary.gas, GasBreakdown::default());
        assert_eq!(summary.category, TransactionCategory::Generic);
        assert!(summary.actions.is_empty());
    }

    #[test]
    fn test_status_must_literally_be_success() {
        let failed = record(json!({
            "digest": "D1",
            "effects": {"status": {"status": "failure", "error": "MoveAbort(...)"}}
        }));
        let summary = build_summary(&failed, Network::Mainnet).unwrap();
        assert_eq!(summary.status, TransactionStatus::Failure);
        assert_eq!(summary.error.as_deref(), Some("MoveAbort(...)"));

        let odd = record(json!({"digest": "D1", "effects": {"status": {"status": "Success"}}}));
        assert_eq!(
            build_summary(&odd, Network::Mainnet).unwrap().status,
            TransactionStatus::Failure
        );
    }

    #[test]
    fn test_gas_breakdown_nets_out_price() {
        let r = record(json!({
            "digest": "D1",
            "transaction": {"data": {
                "sender": "0xabc",
                "gasData": {"budget": "10000000000", "price": "1000000000"},
                "transaction": {"kind": "ProgrammableTransaction", "inputs": [], "transactions": []}
            }},
            "effects": {
                "status": {"status": "success"},
                "executedEpoch": "512",
                "gasUsed": {
                    "computationCost": "3000000000",
                    "storageCost": "2000000000",
                    "storageRebate": "1000000000",
                    "nonRefundableStorageFee": "10000000"
                }
            }
        }));
        let summary = build_summary(&r, Network::Mainnet).unwrap();
        assert_eq!(summary.epoch, "512");
        assert_eq!(summary.sender, "0xabc");
        assert_eq!(summary.gas.budget, 10.0);
        assert_eq!(summary.gas.price, 1.0);
        assert_eq!(summary.gas.computation, 3.0);
        assert_eq!(summary.gas.storage, 2.0);
        assert_eq!(summary.gas.rebate, 1.0);
        assert_eq!(summary.gas.non_refundable, 0.01);
        assert_eq!(summary.gas.net_used, 3.0);
    }

    #[test]
    fn test_extract_calls_skips_other_commands() {
        let r = record(json!({
            "digest": "D1",
            "transaction": {"data": {"transaction": {
                "kind": "ProgrammableSystemTransaction",
                "inputs": [],
                "transactions": [
                    {"MergeCoins": ["GasCoin", [{"Input": 0}]]},
                    {"MoveCall": {"package": "0x3", "module": "sui_system", "function": "request_add_stake"}}
                ]
            }}}
        }));
        let calls = extract_calls(&r);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].module, "sui_system");
        assert!(calls[0].arguments.is_empty());
    }
}
