//! sui-tx-explain: find a Sui transaction on any network and explain it
//!
//! ## Example Usage
//!
//! ```bash
//! # Explain a transaction by digest (searches mainnet, devnet, testnet)
//! sui-tx-explain 4epaeL3kiHkT7sukmBDguao5bKqptHnMtKy8vgpCFteo
//!
//! # Paste an explorer link instead
//! sui-tx-explain https://suiscan.xyz/testnet/tx/4eUy2vzkCUxhtp7JCxAZVnDuzPvVqkjC42A4eevKCCdV
//!
//! # Only look on testnet, print JSON
//! sui-tx-explain --network testnet --json <DIGEST>
//!
//! # Interactive: newest line wins
//! sui-tx-explain --stdin
//! ```

use std::io::BufRead;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sui_tx_explain::args::Args;
use sui_tx_explain::catalog::EXAMPLE_DIGESTS;
use sui_tx_explain::digest::{extract_digest, is_valid_transaction_digest};
use sui_tx_explain::output::{format_examples, format_search_status, format_summary};
use sui_tx_explain::session::{SearchSession, SearchState};
use sui_tx_explain::{explain, NetworkResolver, TransactionSummary};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(summary: &TransactionSummary, json: bool, verbose: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(summary).context("serialize summary")?;
        println!("{}", text);
    } else {
        print!("{}", format_summary(summary, verbose));
    }
    Ok(())
}

async fn run_single(args: &Args, input: &str) -> Result<()> {
    let digest = extract_digest(input);
    if !is_valid_transaction_digest(&digest) {
        bail!(
            "'{}' is not a valid transaction digest or Sui explorer URL",
            digest
        );
    }

    let resolver = NetworkResolver::fullnodes(&args.search_order());
    let summary = explain(&resolver, &digest).await?;
    print_summary(&summary, args.json, args.verbose)
}

async fn run_stdin(args: &Args) -> Result<()> {
    let session = Arc::new(SearchSession::new(Arc::new(NetworkResolver::fullnodes(
        &args.search_order(),
    ))));

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<String>();
    let reader = tokio::task::spawn_blocking(move || -> Result<()> {
        for line in std::io::stdin().lock().lines() {
            let line = line.context("read stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            if tx.send(line).is_err() {
                break;
            }
        }
        Ok(())
    });

    let mut searches = Vec::new();
    while let Some(line) = rx.recv().await {
        let digest = extract_digest(&line);
        if !is_valid_transaction_digest(&digest) {
            eprintln!("skipping '{}': not a valid transaction digest", digest);
            continue;
        }
        let session = Arc::clone(&session);
        let (json, verbose) = (args.json, args.verbose);
        searches.push(tokio::spawn(async move {
            if session.search(&digest).await.is_none() {
                return;
            }
            // A newer line may already have replaced the committed state.
            match session.state() {
                SearchState::Found(summary) => {
                    if let Err(e) = print_summary(&summary, json, verbose) {
                        eprintln!("{:#}", e);
                    }
                }
                state => {
                    if let Some(line) = format_search_status(&state) {
                        eprintln!("{}", line);
                    }
                }
            }
        }));
    }

    for search in searches {
        search.await.context("search task panicked")?;
    }
    reader
        .await
        .map_err(|e| anyhow!("stdin reader failed: {}", e))?
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    args.validate().map_err(|e| anyhow!(e))?;
    init_tracing(args.verbose);

    if args.examples {
        print!("{}", format_examples(EXAMPLE_DIGESTS));
        return Ok(());
    }

    match args.input.as_deref() {
        Some(input) if !args.stdin => run_single(&args, input).await,
        _ => run_stdin(&args).await,
    }
}
