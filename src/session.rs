//! Last-request-wins search sessions.
//!
//! An interactive caller may start a new search before the previous one has
//! finished. Each search takes a generation ticket when it starts; when it
//! finishes it only commits its outcome if no newer search has started since.
//! Superseded searches are left to run to completion and their result is
//! dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::digest::extract_digest;
use crate::error::ExplainError;
use crate::explain;
use crate::resolver::NetworkResolver;
use crate::summary::TransactionSummary;

/// Message shown when a digest could not be resolved.
pub const NOT_FOUND_MESSAGE: &str = "Transaction not found on any network!";

/// What the session currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Searching(String),
    Found(Arc<TransactionSummary>),
    Failed(String),
}

pub struct SearchSession {
    resolver: Arc<NetworkResolver>,
    generation: AtomicU64,
    state: Mutex<SearchState>,
}

impl SearchSession {
    pub fn new(resolver: Arc<NetworkResolver>) -> Self {
        Self {
            resolver,
            generation: AtomicU64::new(0),
            state: Mutex::new(SearchState::Idle),
        }
    }

    pub fn state(&self) -> SearchState {
        self.state.lock().clone()
    }

    /// Resolve and summarize `input` (a digest or explorer URL).
    ///
    /// Returns `None` when a newer search started before this one finished;
    /// in that case the session state is left to the newer search.
    pub async fn search(
        &self,
        input: &str,
    ) -> Option<Result<Arc<TransactionSummary>, ExplainError>> {
        let digest = extract_digest(input);
        let ticket = {
            let mut state = self.state.lock();
            let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = SearchState::Searching(digest.clone());
            ticket
        };

        let outcome = explain(&self.resolver, &digest).await.map(Arc::new);

        let mut state = self.state.lock();
        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!(digest = %digest, ticket = ticket, "discarding superseded search result");
            return None;
        }
        *state = match &outcome {
            Ok(summary) => SearchState::Found(Arc::clone(summary)),
            Err(ExplainError::Resolve(_)) => SearchState::Failed(NOT_FOUND_MESSAGE.to_string()),
            Err(e) => SearchState::Failed(e.to_string()),
        };
        Some(outcome)
    }
}
