//! Transaction record types as returned by `sui_getTransactionBlock`.
//!
//! Every section of the response is optional on the wire (it depends on the
//! requested [`InclusionOptions`] and on the node version), so nearly every
//! field here is defaulted. Consumers decide what a missing value means.
//!
//! Sui encodes `u64` values (gas amounts, epochs, versions) as decimal
//! strings; older nodes and some indexers send plain numbers, so both decode.
//! Sections a node sends as `null` decode as empty.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnNull, DisplayFromStr, PickFirst};

/// Which sections a fullnode should include in a transaction response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InclusionOptions {
    pub show_balance_changes: bool,
    pub show_effects: bool,
    pub show_events: bool,
    pub show_input: bool,
    pub show_object_changes: bool,
}

impl InclusionOptions {
    /// Request every section needed to explain a transaction.
    pub const FULL: InclusionOptions = InclusionOptions {
        show_balance_changes: true,
        show_effects: true,
        show_events: true,
        show_input: true,
        show_object_changes: true,
    };
}

impl Default for InclusionOptions {
    fn default() -> Self {
        Self::FULL
    }
}

/// A transaction block response from a fullnode.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransactionRecord {
    #[serde(default)]
    pub digest: String,

    /// Transaction input (sender, gas data, commands)
    #[serde(default)]
    pub transaction: Option<TransactionBlock>,

    #[serde(default)]
    pub effects: Option<TransactionEffects>,

    /// Emitted events, kept opaque for passthrough display
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub events: Vec<Value>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub object_changes: Vec<ObjectChange>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub balance_changes: Vec<BalanceChange>,

    #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
    pub timestamp_ms: Option<u64>,

    #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
    pub checkpoint: Option<u64>,
}

impl RawTransactionRecord {
    /// Sender address, if the input section was included.
    pub fn sender(&self) -> Option<&str> {
        self.transaction
            .as_ref()
            .map(|tx| tx.data.sender.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Gas data from the transaction input.
    pub fn gas_data(&self) -> Option<&GasData> {
        self.transaction.as_ref().map(|tx| &tx.data.gas_data)
    }

    /// Commands of a programmable transaction. Empty for every other kind.
    pub fn commands(&self) -> &[TransactionCommand] {
        match self.transaction.as_ref().map(|tx| &tx.data.transaction) {
            Some(TransactionKind::ProgrammableTransaction(ptb))
            | Some(TransactionKind::ProgrammableSystemTransaction(ptb)) => &ptb.transactions,
            _ => &[],
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlock {
    pub data: TransactionData,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub tx_signatures: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionData {
    #[serde(default)]
    pub message_version: Option<String>,
    #[serde(default)]
    pub transaction: TransactionKind,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub gas_data: GasData,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasData {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub payment: Vec<Value>,
    #[serde(default)]
    pub owner: String,
    #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
    pub price: Option<u64>,
    #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
    pub budget: Option<u64>,
}

/// Transaction kind, discriminated by the `kind` field.
///
/// Only programmable transactions carry commands; system kinds (genesis,
/// epoch change, consensus commit prologue, ...) collapse into `Other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TransactionKind {
    ProgrammableTransaction(ProgrammableTransaction),
    ProgrammableSystemTransaction(ProgrammableTransaction),
    #[default]
    #[serde(other)]
    Other,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgrammableTransaction {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub inputs: Vec<Value>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub transactions: Vec<TransactionCommand>,
}

/// A command in a Programmable Transaction Block.
///
/// Only `MoveCall` is decoded; the rest are kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransactionCommand {
    MoveCall(MoveCallCommand),
    TransferObjects(Value),
    SplitCoins(Value),
    MergeCoins(Value),
    MakeMoveVec(Value),
    Publish(Value),
    Upgrade(Value),
}

/// Move function call
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveCallCommand {
    pub package: String,
    pub module: String,
    pub function: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub type_arguments: Vec<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub arguments: Vec<CallArgument>,
}

/// Argument reference in a PTB command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallArgument {
    /// Gas coin (special input)
    GasCoin,
    /// Reference to a transaction input
    Input(u16),
    /// Reference to a previous command result
    Result(u16),
    /// Reference to a nested result (for multi-return functions)
    NestedResult(u16, u16),
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEffects {
    #[serde(default)]
    pub message_version: Option<String>,
    #[serde(default)]
    pub status: ExecutionStatus,
    #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
    pub executed_epoch: Option<u64>,
    #[serde(default)]
    pub gas_used: GasCostSummary,
    #[serde(default)]
    pub transaction_digest: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Gas charged by execution, in MIST.
#[serde_as]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasCostSummary {
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    #[serde(default)]
    pub computation_cost: u64,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    #[serde(default)]
    pub storage_cost: u64,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    #[serde(default)]
    pub storage_rebate: u64,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    #[serde(default)]
    pub non_refundable_storage_fee: u64,
}

/// Ownership descriptor for objects and balance holders.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    AddressOwner(String),
    ObjectOwner(String),
    Shared {
        #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
        initial_shared_version: u64,
    },
    Immutable,
    ConsensusAddressOwner {
        #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
        start_version: u64,
        owner: String,
    },
}

/// One entry of `objectChanges`, discriminated by the `type` field.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectChange {
    #[serde(rename_all = "camelCase")]
    Created {
        #[serde(default)]
        sender: String,
        #[serde(default)]
        owner: Option<Owner>,
        #[serde(default)]
        object_type: String,
        object_id: String,
        #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
        version: Option<u64>,
    },
    #[serde(rename_all = "camelCase")]
    Deleted {
        #[serde(default)]
        sender: String,
        #[serde(default)]
        object_type: String,
        object_id: String,
        #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
        version: Option<u64>,
    },
    #[serde(rename_all = "camelCase")]
    Mutated {
        #[serde(default)]
        sender: String,
        #[serde(default)]
        owner: Option<Owner>,
        #[serde(default)]
        object_type: String,
        object_id: String,
        #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
        version: Option<u64>,
    },
    #[serde(rename_all = "camelCase")]
    Transferred {
        #[serde(default)]
        sender: String,
        #[serde(default)]
        recipient: Option<Owner>,
        #[serde(default)]
        object_type: String,
        object_id: String,
        #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
        version: Option<u64>,
    },
    #[serde(rename_all = "camelCase")]
    Published {
        package_id: String,
        #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
        version: Option<u64>,
        #[serde_as(as = "DefaultOnNull")]
        #[serde(default)]
        modules: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Wrapped {
        #[serde(default)]
        sender: String,
        #[serde(default)]
        object_type: String,
        object_id: String,
        #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
        version: Option<u64>,
    },
    /// A `type` tag this build does not know about.
    #[serde(other)]
    Unrecognized,
}

/// Coin balance delta for one owner. `amount` is a signed base-unit integer
/// encoded as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceChange {
    #[serde(default)]
    pub owner: Option<Owner>,
    pub coin_type: String,
    pub amount: String,
}
