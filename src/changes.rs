//! Partition object and balance changes into typed buckets.

use serde::Serialize;
use sui_explain_types::{BalanceChange, ObjectChange, Owner};

use crate::error::SummaryError;
use crate::format::{coin_symbol, format_base_units, shorten_address};

/// An object that changed hands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transfer {
    pub object_id: String,
    pub object_type: String,
    pub from: String,
    pub to: String,
}

/// A package published by the transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Publish {
    pub package_id: String,
    /// Module names joined with `", "`.
    pub modules: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceDirection {
    Sent,
    Received,
}

impl BalanceDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            BalanceDirection::Sent => "sent",
            BalanceDirection::Received => "received",
        }
    }
}

/// A balance change resolved into display terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceMovement {
    pub account: String,
    pub direction: BalanceDirection,
    /// Magnitude in whole-coin units, already scaled from base units.
    pub amount: String,
    pub symbol: String,
}

/// Object and balance changes sorted into buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassifiedChanges {
    pub created: usize,
    pub mutated: usize,
    pub deleted: usize,
    pub wrapped: usize,
    pub transfers: Vec<Transfer>,
    pub published: Vec<Publish>,
    pub balances: Vec<BalanceMovement>,
}

impl ClassifiedChanges {
    /// Number of object changes accounted for across every bucket.
    pub fn object_change_count(&self) -> usize {
        self.created
            + self.mutated
            + self.deleted
            + self.wrapped
            + self.transfers.len()
            + self.published.len()
    }
}

/// Classify a transaction's object and balance changes.
///
/// Every object change lands in exactly one bucket. A tag outside the known
/// set is an error, not something to skip.
pub fn classify_changes(
    object_changes: &[ObjectChange],
    balance_changes: &[BalanceChange],
) -> Result<ClassifiedChanges, SummaryError> {
    let mut out = ClassifiedChanges::default();

    for (index, change) in object_changes.iter().enumerate() {
        match change {
            ObjectChange::Created { .. } => out.created += 1,
            ObjectChange::Deleted { .. } => out.deleted += 1,
            ObjectChange::Mutated { .. } => out.mutated += 1,
            ObjectChange::Transferred {
                sender,
                recipient,
                object_type,
                object_id,
                ..
            } => out.transfers.push(Transfer {
                object_id: object_id.clone(),
                object_type: object_type.clone(),
                from: sender.clone(),
                to: recipient_label(recipient.as_ref()),
            }),
            ObjectChange::Published {
                package_id,
                modules,
                ..
            } => out.published.push(Publish {
                package_id: package_id.clone(),
                modules: modules.join(", "),
            }),
            ObjectChange::Wrapped { .. } => out.wrapped += 1,
            ObjectChange::Unrecognized => {
                return Err(SummaryError::UnrecognizedObjectChange { index })
            }
        }
    }

    out.balances = balance_changes.iter().map(classify_balance).collect();
    Ok(out)
}

/// Transfer recipient: address owner, else object owner, else `Unknown`.
fn recipient_label(recipient: Option<&Owner>) -> String {
    match recipient {
        Some(Owner::AddressOwner(addr)) => addr.clone(),
        Some(Owner::ObjectOwner(id)) => id.clone(),
        _ => "Unknown".to_string(),
    }
}

/// Human label for the holder of a balance.
pub fn account_label(owner: Option<&Owner>) -> String {
    match owner {
        Some(Owner::AddressOwner(addr)) => shorten_address(addr),
        Some(Owner::ObjectOwner(id)) => shorten_address(id),
        Some(Owner::Shared { .. }) => "Shared".to_string(),
        Some(Owner::ConsensusAddressOwner { owner, .. }) => shorten_address(owner),
        Some(Owner::Immutable) => "Immutable".to_string(),
        None => "Unknown".to_string(),
    }
}

fn classify_balance(change: &BalanceChange) -> BalanceMovement {
    let raw = change.amount.trim();
    let (direction, magnitude) = match raw.strip_prefix('-') {
        Some(rest) => (BalanceDirection::Sent, rest),
        None => (
            BalanceDirection::Received,
            raw.strip_prefix('+').unwrap_or(raw),
        ),
    };
    // Unparseable amounts degrade to zero rather than failing the summary.
    let base_units = magnitude.parse::<u128>().unwrap_or(0);

    BalanceMovement {
        account: account_label(change.owner.as_ref()),
        direction,
        amount: format_base_units(base_units),
        symbol: coin_symbol(&change.coin_type).to_string(),
    }
}
