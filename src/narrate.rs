//! Plain-language action lines for a classified transaction.

use crate::changes::ClassifiedChanges;
use crate::format::{count_label, format_object_type};
use crate::summary::CallInvocation;

/// Describe what happened, in order: balance movements, then transfers,
/// then Move calls. Empty sections produce no lines at all.
pub fn narrate(classified: &ClassifiedChanges, calls: &[CallInvocation]) -> Vec<String> {
    let mut actions = Vec::new();

    for movement in &classified.balances {
        actions.push(format!(
            "{} {} {} {}",
            movement.account,
            movement.direction.as_str(),
            movement.amount,
            movement.symbol
        ));
    }

    if !classified.transfers.is_empty() {
        actions.push(count_label(
            "Transferred",
            classified.transfers.len(),
            "object",
        ));
        for transfer in &classified.transfers {
            actions.push(format!(
                "- Transferred {} from {} to {}",
                format_object_type(&transfer.object_type),
                transfer.from,
                transfer.to
            ));
        }
    }

    if !calls.is_empty() {
        actions.push(count_label("Executed", calls.len(), "move call"));
        for call in calls {
            actions.push(format!("- Called {}::{}()", call.module, call.function));
        }
    }

    actions
}
