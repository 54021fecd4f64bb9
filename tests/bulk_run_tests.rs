//! End-to-end tests for the bulk generation pipeline against a mock endpoint.

use serde_json::json;
use std::time::Duration;
use tokio_test::assert_ok;
use walgen::batch::{process_batches, BatchOptions, RunEvent};
use walgen::client::{ClientConfig, WalletApiClient};
use walgen::tracker::ResultTracker;
use walgen::types::{HandleEntry, HandleType, ResultStatus};
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> WalletApiClient {
    let endpoint = format!("{}/api/wallet/generate", server.uri());
    assert_ok!(WalletApiClient::with_config(
        &endpoint,
        ClientConfig {
            timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(5),
        },
    ))
}

/// Short pacing delay keeps the multi-batch tests fast.
fn fast_options() -> BatchOptions {
    BatchOptions {
        batch_size: 5,
        batch_delay: Duration::from_millis(10),
    }
}

fn entries(n: usize) -> Vec<HandleEntry> {
    (0..n)
        .map(|i| HandleEntry::new(format!("@user{}", i), HandleType::Twitter))
        .collect()
}

fn success_response(address: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "success": true,
        "wallet": { "address": address }
    }))
}

async fn mount_catch_all_success(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/wallet/generate"))
        .respond_with(success_response("0x00000000000000000000000000000000000000aa"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn seven_entries_run_in_two_batches_with_progress_events() {
    let server = MockServer::start().await;
    mount_catch_all_success(&server).await;

    let client = client_for(&server);
    let mut tracker = ResultTracker::new();
    let work = tracker.begin_run(&entries(7));

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let results = process_batches(&client, fast_options(), work, Some(&tx)).await;
    tracker.record_batch(&results);

    // 5 + 2 split, progress after each chunk, then completion
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    assert_eq!(events.len(), 3);
    match &events[0] {
        RunEvent::BatchCompleted { results, progress } => {
            assert_eq!(results.len(), 5);
            assert_eq!((progress.current, progress.total), (5, 7));
        }
        other => panic!("unexpected event: {:?}", other),
    }
    match &events[1] {
        RunEvent::BatchCompleted { results, progress } => {
            assert_eq!(results.len(), 2);
            assert_eq!((progress.current, progress.total), (7, 7));
        }
        other => panic!("unexpected event: {:?}", other),
    }
    assert!(matches!(events[2], RunEvent::Completed));

    let summary = tracker.summary();
    assert_eq!(summary.total, 7);
    assert_eq!(summary.success, 7);
    assert!(summary.is_complete());

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 7);
}

#[tokio::test]
async fn request_body_carries_handle_and_uppercase_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/wallet/generate"))
        .and(body_json(json!({ "handle": "@alice", "type": "TELEGRAM" })))
        .respond_with(success_response("0xa11ce"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let address = assert_ok!(client.generate_wallet("@alice", HandleType::Telegram).await);
    assert_eq!(address, "0xa11ce");
}

#[tokio::test]
async fn one_rejected_handle_does_not_affect_the_rest() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/wallet/generate"))
        .and(body_partial_json(json!({ "handle": "@bob" })))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({ "error": "rate limited" })),
        )
        .with_priority(1)
        .mount(&server)
        .await;
    mount_catch_all_success(&server).await;

    let handles = vec![
        HandleEntry::new("@alice", HandleType::Twitter),
        HandleEntry::new("@bob", HandleType::Twitter),
        HandleEntry::new("@carol", HandleType::Telegram),
    ];
    let client = client_for(&server);
    let mut tracker = ResultTracker::new();
    let work = tracker.begin_run(&handles);
    let results = process_batches(&client, fast_options(), work, None).await;
    tracker.record_batch(&results);

    let results = tracker.results();
    assert_eq!(results[0].status, ResultStatus::Success);
    assert_eq!(results[1].status, ResultStatus::Failed);
    assert_eq!(results[1].error_message.as_deref(), Some("rate limited"));
    assert!(results[1].wallet_address.is_empty());
    assert_eq!(results[2].status, ResultStatus::Success);
}

#[tokio::test]
async fn retry_redispatches_only_failed_items() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/wallet/generate"))
        .and(body_partial_json(json!({ "handle": "@carol" })))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_catch_all_success(&server).await;

    let handles = vec![
        HandleEntry::new("@alice", HandleType::Twitter),
        HandleEntry::new("@carol", HandleType::Twitter),
    ];
    let client = client_for(&server);
    let mut tracker = ResultTracker::new();
    let work = tracker.begin_run(&handles);
    let results = process_batches(&client, fast_options(), work, None).await;
    tracker.record_batch(&results);

    assert_eq!(tracker.summary().failed, 1);
    let first_pass_address = tracker.results()[0].wallet_address.clone();

    // Endpoint recovers; only the failed item goes out again
    server.reset().await;
    Mock::given(method("POST"))
        .and(path("/api/wallet/generate"))
        .respond_with(success_response("0xretried"))
        .mount(&server)
        .await;

    let retry_work = tracker.mark_failed_pending();
    assert_eq!(retry_work.len(), 1);
    assert_eq!(retry_work[0].handle, "@carol");

    let retry_results = process_batches(&client, fast_options(), retry_work, None).await;
    tracker.record_batch(&retry_results);

    let results = tracker.results();
    assert_eq!(results[0].status, ResultStatus::Success);
    assert_eq!(results[0].wallet_address, first_pass_address);
    assert_eq!(results[1].status, ResultStatus::Success);
    assert_eq!(results[1].wallet_address, "0xretried");
    assert!(tracker.summary().is_complete());

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
}

#[tokio::test]
async fn error_status_without_body_gets_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/wallet/generate"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .generate_wallet("@alice", HandleType::Twitter)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "request failed with status 500");
}

#[tokio::test]
async fn success_false_with_error_field_surfaces_endpoint_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/wallet/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "handle already has a wallet"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .generate_wallet("@bob", HandleType::Telegram)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "handle already has a wallet");
}
