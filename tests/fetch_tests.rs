//! Snapshot fetching against a local canned server.

mod support;

use std::time::Duration;

use bookflip::adapter::outbound::bazaar::{BazaarClient, BazaarConfig};
use bookflip::application::RankingService;
use bookflip::domain::ranking::RankingOptions;
use bookflip::error::{Error, FetchError};
use bookflip::port::SnapshotSource;

use support::server::{CannedServer, Reply};
use support::fixture_text;

fn config(api_url: String) -> BazaarConfig {
    BazaarConfig {
        api_url,
        timeout_ms: 2_000,
        connect_timeout_ms: 1_000,
        retry_max_attempts: 1,
        retry_backoff_ms: 0,
    }
}

#[tokio::test]
async fn fetches_and_ranks_snapshot() {
    let server = CannedServer::start(vec![Reply::json(fixture_text("bazaar.json"))]).await;
    let client = BazaarClient::from_config(&config(server.api_url()));

    let service = RankingService::new(client, RankingOptions::default());
    let ranking = service.refresh().await.expect("ranking");

    let families: Vec<&str> = ranking.iter().map(|entry| entry.family()).collect();
    assert_eq!(
        families,
        vec![
            "ENCHANTMENT_ULTIMATE_WISE",
            "ENCHANTMENT_GROWTH",
            "ENCHANTMENT_SMITE",
            "ENCHANTMENT_LOSS",
            "ENCHANTMENT_TELEKINESIS",
        ]
    );
}

#[tokio::test]
async fn upstream_failure_flag_is_not_an_error() {
    let server =
        CannedServer::start(vec![Reply::json(fixture_text("bazaar_failed.json"))]).await;
    let client = BazaarClient::from_config(&config(server.api_url()));

    let snapshot = client.fetch_snapshot().await.expect("snapshot");
    assert!(!snapshot.success);

    let ranking = RankingService::new(client, RankingOptions::default())
        .refresh()
        .await
        .expect("ranking");
    assert!(ranking.is_empty());
}

#[tokio::test]
async fn http_error_status_is_reported() {
    let server = CannedServer::start(vec![Reply::status(503, "{}")]).await;
    let client = BazaarClient::from_config(&config(server.api_url()));

    let result = client.fetch_snapshot().await;
    assert!(matches!(
        result,
        Err(Error::Fetch(FetchError::Status { status: 503, .. }))
    ));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = CannedServer::start(vec![Reply::json("<html>busy</html>")]).await;
    let client = BazaarClient::from_config(&config(server.api_url()));

    let result = client.fetch_snapshot().await;
    assert!(matches!(result, Err(Error::Fetch(FetchError::Decode { .. }))));
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let server = CannedServer::start(vec![Reply::Stall(Duration::from_secs(5))]).await;
    let client = BazaarClient::from_config(&BazaarConfig {
        timeout_ms: 200,
        ..config(server.api_url())
    });

    let result = client.fetch_snapshot().await;
    match result {
        Err(Error::Fetch(FetchError::Timeout { timeout_ms, .. })) => assert_eq!(timeout_ms, 200),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn retries_server_errors_until_success() {
    let server = CannedServer::start(vec![
        Reply::status(502, "{}"),
        Reply::json(fixture_text("bazaar.json")),
    ])
    .await;
    let client = BazaarClient::from_config(&BazaarConfig {
        retry_max_attempts: 3,
        ..config(server.api_url())
    });

    let snapshot = client.fetch_snapshot().await.expect("snapshot after retry");
    assert!(snapshot.success);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = CannedServer::start(vec![
        Reply::status(404, "{}"),
        Reply::json(fixture_text("bazaar.json")),
    ])
    .await;
    let client = BazaarClient::from_config(&BazaarConfig {
        retry_max_attempts: 3,
        ..config(server.api_url())
    });

    let result = client.fetch_snapshot().await;
    assert!(matches!(
        result,
        Err(Error::Fetch(FetchError::Status { status: 404, .. }))
    ));
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = BazaarClient::from_config(&config(format!("http://{addr}")));
    let result = client.fetch_snapshot().await;
    assert!(matches!(
        result,
        Err(Error::Fetch(FetchError::Transport { .. }))
    ));
}
