//! Integration tests using mock HTTP server
//!
//! Tests the full flow: intersection → controller → HTTP listing → item store

use feedscroll::config::FeedConfig;
use feedscroll::observer::IntersectionEntry;
use feedscroll::pagination::{ItemStore, LoadOutcome, PaginationController, SkipReason};
use feedscroll::source::{DataSource, HttpDataSource};
use futures::channel::mpsc;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn users(page: u32, count: u32) -> serde_json::Value {
    let results: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "gender": "female",
                "name": {"title": "Ms", "first": format!("User{page}-{i}"), "last": "Doe"},
                "email": format!("user{page}.{i}@example.com"),
            })
        })
        .collect();
    json!({
        "results": results,
        "info": {"seed": "abc", "results": count, "page": page, "version": "1.4"}
    })
}

async fn mount_page(server: &MockServer, page: u32, count: u32) {
    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("page", page.to_string()))
        .and(query_param("results", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users(page, count)))
        .expect(1)
        .mount(server)
        .await;
}

fn controller_for(server: &MockServer) -> Arc<PaginationController> {
    let config = FeedConfig::default()
        .with_endpoint(format!("{}/api/", server.uri()))
        .without_rate_limit();
    let source: Arc<dyn DataSource> = Arc::new(HttpDataSource::from_config(&config).unwrap());
    Arc::new(PaginationController::new(source, ItemStore::new()))
}

async fn wait_for_len(controller: &PaginationController, len: usize) {
    let mut rx = controller.store().subscribe();
    tokio::time::timeout(Duration::from_secs(5), rx.wait_for(|n| *n >= len))
        .await
        .expect("timed out waiting for records")
        .unwrap();
}

// ============================================================================
// Scroll Scenarios
// ============================================================================

#[tokio::test]
async fn test_two_pages_via_intersections() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, 1, 10).await;
    mount_page(&mock_server, 2, 10).await;

    let controller = controller_for(&mock_server);
    let (tx, rx) = mpsc::unbounded();
    let observer = controller.observe_bottom(rx);

    // Sentinel visible on an empty list
    tx.unbounded_send(IntersectionEntry::visible()).unwrap();
    wait_for_len(&controller, 10).await;
    assert_eq!(controller.page(), 2);

    // New rows push the sentinel out of view, then the user scrolls down
    tx.unbounded_send(IntersectionEntry::hidden()).unwrap();
    tx.unbounded_send(IntersectionEntry::visible()).unwrap();
    wait_for_len(&controller, 20).await;
    assert_eq!(controller.page(), 3);

    let records = controller.store().snapshot().await;
    assert_eq!(records[0]["name"]["first"], "User1-0");
    assert_eq!(records[19]["name"]["first"], "User2-9");

    observer.disconnect();
}

#[tokio::test]
async fn test_network_failure_is_swallowed() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let controller = controller_for(&mock_server);
    let outcome = controller.load_more().await;

    assert_eq!(outcome, LoadOutcome::Failed { page: 1 });
    assert_eq!(controller.store().len().await, 0);
    assert_eq!(controller.page(), 1);
    assert!(!controller.is_loading());
    assert_eq!(controller.stats().failures, 1);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_swallowed() {
    let config = FeedConfig::default()
        .with_endpoint("http://127.0.0.1:9/api/")
        .without_rate_limit();
    let source: Arc<dyn DataSource> = Arc::new(HttpDataSource::from_config(&config).unwrap());
    let controller = PaginationController::new(source, ItemStore::new());

    assert_eq!(controller.load_more().await, LoadOutcome::Failed { page: 1 });
    assert!(!controller.is_loading());
    assert_eq!(controller.page(), 1);
}

#[tokio::test]
async fn test_failed_page_is_retried_on_next_trigger() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, 1, 10).await;

    let controller = controller_for(&mock_server);

    assert_eq!(controller.load_more().await, LoadOutcome::Failed { page: 1 });
    assert_eq!(
        controller.load_more().await,
        LoadOutcome::Loaded { page: 1, count: 10 }
    );
    assert_eq!(controller.page(), 2);
}

#[tokio::test]
async fn test_slow_page_blocks_overlapping_loads() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(users(1, 10))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let controller = controller_for(&mock_server);
    let background = Arc::clone(&controller);
    let first = tokio::spawn(async move { background.load_more().await });

    let mut loading = controller.subscribe_loading();
    loading.wait_for(|l| *l).await.unwrap();
    for _ in 0..10 {
        assert_eq!(
            controller.load_more().await,
            LoadOutcome::Skipped(SkipReason::InFlight)
        );
        assert!(controller.is_loading());
    }

    assert_eq!(
        first.await.unwrap(),
        LoadOutcome::Loaded { page: 1, count: 10 }
    );
    assert!(!controller.is_loading());
    assert_eq!(controller.store().len().await, 10);
}

#[tokio::test]
async fn test_has_more_false_blocks_observer() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users(1, 10)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let controller = controller_for(&mock_server);
    controller.set_has_more(false).await;

    let entries = futures::stream::iter(vec![
        IntersectionEntry::visible(),
        IntersectionEntry::hidden(),
        IntersectionEntry::visible(),
    ]);
    controller.observe_bottom(entries).closed().await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(controller.store().len().await, 0);
    assert_eq!(controller.page(), 1);
}
