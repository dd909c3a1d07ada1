//! End-to-end pipeline scenarios driven through the public API.

use std::time::{Duration, Instant};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use sentigate::analysis::AnalysisOrchestrator;
use sentigate::cache::{MemoryCache, SENTIGATE_STATUS_HEADER};
use sentigate::gateway::{HandlerState, create_router_with_state};
use sentigate::limiter::RateLimiter;
use sentigate::model::MockModelAdapter;
use sentigate::normalize::TextNormalizer;

fn pipeline(
    adapter: MockModelAdapter,
    quota: u32,
) -> AnalysisOrchestrator<MockModelAdapter, MemoryCache> {
    AnalysisOrchestrator::new(
        TextNormalizer::new(1000, false),
        RateLimiter::new(quota, Duration::from_secs(60), 1000),
        MemoryCache::new(100),
        adapter,
        Duration::from_secs(3600),
    )
}

#[tokio::test]
async fn url_and_emoji_scenario_computes_once() {
    let adapter = MockModelAdapter::new();
    let orch = pipeline(adapter.clone(), 60);
    let now = Instant::now();

    let first = orch
        .analyze_at("Check this out: http://x.co 😊", "client-a", now)
        .await
        .unwrap();
    assert!(!first.status.is_hit());
    assert_eq!(adapter.calls(), 1);

    let second = orch
        .analyze_at("Check this out: http://x.co 😊", "client-a", now)
        .await
        .unwrap();
    assert!(second.status.is_hit());
    assert_eq!(adapter.calls(), 1);
    assert_eq!(first.result, second.result);
}

#[tokio::test]
async fn quota_scenario_ten_allowed_eleventh_rejected() {
    let orch = pipeline(MockModelAdapter::new(), 10);
    let now = Instant::now();

    for i in 0..10 {
        let outcome = orch
            .analyze_at(&format!("message number {i}"), "burst-client", now)
            .await;
        assert!(outcome.is_ok(), "call {} should be admitted", i + 1);
    }

    match orch
        .analyze_at("message number 10", "burst-client", now)
        .await
    {
        Err(sentigate::AnalysisError::RateLimitExceeded { retry_after }) => {
            assert!(retry_after > Duration::ZERO);
        }
        other => panic!("expected RateLimitExceeded, got {other:?}"),
    }
}

#[tokio::test]
async fn http_round_trip_serves_cached_result() {
    let adapter = MockModelAdapter::new();
    let router = create_router_with_state(HandlerState::new(pipeline(adapter.clone(), 60)));

    let post = |text: &'static str| {
        Request::builder()
            .method("POST")
            .uri("/api/v1/sentiment/analyze")
            .header("content-type", "application/json")
            .header("X-Client-Id", "integration")
            .body(Body::from(serde_json::json!({ "text": text }).to_string()))
            .unwrap()
    };

    let first = router.clone().oneshot(post("The film was stunning")).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(first.headers().get(SENTIGATE_STATUS_HEADER).unwrap(), "MISS");

    let bytes = first.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["text"], "The film was stunning");
    let scores = json["scores"].as_array().unwrap();
    assert!(!scores.is_empty());

    // Scores arrive in canonical order: descending confidence.
    let confidences: Vec<f64> = scores
        .iter()
        .map(|s| s["score"].as_f64().unwrap())
        .collect();
    let mut sorted = confidences.clone();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
    assert_eq!(confidences, sorted);

    let second = router.clone().oneshot(post("The film was stunning")).await.unwrap();
    assert_eq!(second.headers().get(SENTIGATE_STATUS_HEADER).unwrap(), "HIT");
    assert_eq!(adapter.calls(), 1);
}
