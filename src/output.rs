//! Output formatting for the sui-tx-explain CLI
//!
//! Human-readable terminal rendering of summaries and the example catalog.

use crate::catalog::ExampleDigest;
use crate::format::shorten_address;
use crate::session::SearchState;
use crate::summary::{TransactionStatus, TransactionSummary};

fn ansi_color(name: &str) -> &'static str {
    match name {
        "green" => "\x1b[32m",
        "orange" => "\x1b[33m",
        "blue" => "\x1b[34m",
        _ => "\x1b[37m",
    }
}

/// Format a transaction summary for display
pub fn format_summary(summary: &TransactionSummary, verbose: bool) -> String {
    let mut out = String::new();

    match summary.status {
        TransactionStatus::Success => out.push_str("\x1b[32m✓ SUCCESS\x1b[0m\n\n"),
        TransactionStatus::Failure => out.push_str("\x1b[31m✗ FAILURE\x1b[0m\n\n"),
    }
    if verbose {
        if let Some(error) = &summary.error {
            out.push_str(&format!("Error: {}\n\n", error));
        }
    }

    out.push_str(&format!("Digest:   {}\n", summary.digest));
    out.push_str(&format!(
        "Found on: {}{}\x1b[0m\n",
        ansi_color(summary.network.color()),
        summary.network.display_name()
    ));
    out.push_str(&format!("Sender:   {}\n", shorten_address(&summary.sender)));
    out.push_str(&format!("Epoch:    {}\n", summary.epoch));
    out.push_str(&format!("Type:     \x1b[1m{}\x1b[0m\n\n", summary.category));

    out.push_str("\x1b[1mObject Changes:\x1b[0m\n");
    out.push_str(&format!(
        "  Created \x1b[32m{}\x1b[0m  Modified \x1b[34m{}\x1b[0m  Deleted \x1b[31m{}\x1b[0m\n\n",
        summary.objects.created, summary.objects.mutated, summary.objects.deleted
    ));

    let gas = &summary.gas;
    out.push_str(&format!("\x1b[1mGas used:\x1b[0m {:.6} SUI\n", gas.net_used));
    out.push_str(&format!(
        "  price {:.3e}  computation {:.3e}  storage {:.3e}  rebate {:.3e}  non-refundable {:.3e}\n",
        gas.price, gas.computation, gas.storage, gas.rebate, gas.non_refundable
    ));
    if verbose {
        out.push_str(&format!("  budget {:.6} SUI\n", gas.budget));
    }
    out.push('\n');

    if !summary.published.is_empty() {
        out.push_str("\x1b[1mPublished Packages:\x1b[0m\n");
        for publish in &summary.published {
            out.push_str(&format!(
                "  \x1b[36m{}\x1b[0m ({})\n",
                shorten_address(&publish.package_id),
                publish.modules
            ));
        }
        out.push('\n');
    }

    out.push_str("\x1b[1mWhat happened:\x1b[0m\n");
    if summary.actions.is_empty() {
        out.push_str("  (no recorded actions)\n");
    }
    for action in &summary.actions {
        out.push_str(&format!("  {}\n", action));
    }

    out
}

/// One status line for a session that is not showing a summary.
pub fn format_search_status(state: &SearchState) -> Option<String> {
    match state {
        SearchState::Idle | SearchState::Found(_) => None,
        SearchState::Searching(digest) => Some(format!("Searching for {} ...", digest)),
        SearchState::Failed(message) => Some(format!("\x1b[31m{}\x1b[0m", message)),
    }
}

/// Format the example catalog for display
pub fn format_examples(examples: &[ExampleDigest]) -> String {
    let mut out = String::new();
    for example in examples {
        out.push_str(&format!(
            "{}{:<8}\x1b[0m {}  {}\n",
            ansi_color(example.network.color()),
            example.network.as_str(),
            example.digest,
            example.description
        ));
        if !example.features.is_empty() {
            out.push_str(&format!("         {}\n", example.features.join(" · ")));
        }
    }
    out
}
