//! Overlapping searches on one session: only the newest one lands.

mod common;

use std::sync::Arc;

use common::{simple_record, Gate, MockFetcher};
use sui_transport::{Network, TransactionFetcher};
use sui_tx_explain::session::{SearchSession, SearchState, NOT_FOUND_MESSAGE};
use sui_tx_explain::NetworkResolver;

fn session(fetcher: MockFetcher) -> Arc<SearchSession> {
    let resolver = NetworkResolver::new(vec![(
        Network::Mainnet,
        Arc::new(fetcher) as Arc<dyn TransactionFetcher>,
    )]);
    Arc::new(SearchSession::new(Arc::new(resolver)))
}

#[tokio::test]
async fn test_starts_idle() {
    let session = session(MockFetcher::new());
    assert_eq!(session.state(), SearchState::Idle);
}

#[tokio::test]
async fn test_found_result_is_committed() {
    let session = session(MockFetcher::new().with_record(simple_record("D1")));

    let summary = session.search("  D1 ").await.unwrap().unwrap();
    assert_eq!(summary.digest, "D1");
    assert_eq!(session.state(), SearchState::Found(summary));
}

#[tokio::test]
async fn test_not_found_sets_failure_message() {
    let session = session(MockFetcher::new());

    let outcome = session.search("Missing").await.unwrap();
    assert!(outcome.is_err());
    assert_eq!(
        session.state(),
        SearchState::Failed(NOT_FOUND_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn test_explorer_url_is_reduced_to_digest() {
    let digest = "4epaeL3kiHkT7sukmBDguao5bKqptHnMtKy8vgpCFteo";
    let session = session(MockFetcher::new().with_record(simple_record(digest)));

    let url = format!("https://suiscan.xyz/devnet/tx/{}", digest);
    let summary = session.search(&url).await.unwrap().unwrap();
    assert_eq!(summary.digest, digest);
}

#[tokio::test]
async fn test_last_request_wins() {
    let gate = Arc::new(Gate::default());
    let session = session(
        MockFetcher::new()
            .with_record(simple_record("SLOW"))
            .with_record(simple_record("FAST"))
            .with_gate("SLOW", Arc::clone(&gate)),
    );

    let slow = tokio::spawn({
        let session = Arc::clone(&session);
        async move { session.search("SLOW").await }
    });
    gate.entered.notified().await;
    assert_eq!(session.state(), SearchState::Searching("SLOW".into()));

    let fast = session.search("FAST").await.unwrap().unwrap();
    assert_eq!(fast.digest, "FAST");

    gate.release.notify_one();
    let superseded = slow.await.unwrap();
    assert!(superseded.is_none());

    match session.state() {
        SearchState::Found(summary) => assert_eq!(summary.digest, "FAST"),
        other => panic!("expected the newer search to be shown, got {:?}", other),
    }
}

#[tokio::test]
async fn test_superseded_failure_does_not_clobber_success() {
    let gate = Arc::new(Gate::default());
    let session = session(
        MockFetcher::new()
            .with_record(simple_record("FAST"))
            .with_gate("Missing", Arc::clone(&gate)),
    );

    let slow = tokio::spawn({
        let session = Arc::clone(&session);
        async move { session.search("Missing").await }
    });
    gate.entered.notified().await;

    session.search("FAST").await.unwrap().unwrap();
    gate.release.notify_one();
    assert!(slow.await.unwrap().is_none());

    assert!(matches!(session.state(), SearchState::Found(_)));
}
