use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::{HandlerState, create_router_with_state, handler::CLIENT_ID_HEADER};
use crate::analysis::AnalysisOrchestrator;
use crate::cache::{MemoryCache, SENTIGATE_STATUS_HEADER};
use crate::limiter::RateLimiter;
use crate::model::MockModelAdapter;
use crate::normalize::TextNormalizer;

fn test_router(adapter: MockModelAdapter, quota: u32) -> Router {
    let orchestrator = AnalysisOrchestrator::new(
        TextNormalizer::new(1000, false),
        RateLimiter::new(quota, Duration::from_secs(60), 100),
        MemoryCache::new(16),
        adapter,
        Duration::from_secs(3600),
    );
    create_router_with_state(HandlerState::new(orchestrator))
}

async fn post_analyze(router: &Router, text: &str, client: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/sentiment/analyze")
        .header("content-type", "application/json")
        .header(CLIENT_ID_HEADER, client)
        .body(Body::from(
            serde_json::json!({ "text": text }).to_string(),
        ))
        .unwrap();

    router.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn healthz_reports_ok() {
    let router = test_router(MockModelAdapter::new(), 60);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(SENTIGATE_STATUS_HEADER).unwrap(),
        "healthy"
    );

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn analyze_returns_scores_with_cache_provenance() {
    let router = test_router(MockModelAdapter::new(), 60);

    let first = post_analyze(&router, "what a wonderful day", "client-a").await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(
        first.headers().get(SENTIGATE_STATUS_HEADER).unwrap(),
        "MISS"
    );

    let json = body_json(first).await;
    assert_eq!(json["text"], "what a wonderful day");
    assert_eq!(json["model"], "mock-sentiment");
    assert_eq!(json["scores"][0]["label"], "positive");

    let second = post_analyze(&router, "what a wonderful day", "client-a").await;
    assert_eq!(
        second.headers().get(SENTIGATE_STATUS_HEADER).unwrap(),
        "HIT"
    );
}

#[tokio::test]
async fn blank_text_returns_400() {
    let router = test_router(MockModelAdapter::new(), 60);

    let response = post_analyze(&router, "   ", "client-a").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get(SENTIGATE_STATUS_HEADER).unwrap(),
        "validation_error"
    );

    let json = body_json(response).await;
    assert_eq!(json["code"], 400);
}

#[tokio::test]
async fn over_quota_returns_429_with_retry_after() {
    let router = test_router(MockModelAdapter::new(), 1);

    let first = post_analyze(&router, "fine words", "client-a").await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = post_analyze(&router, "fine words", "client-a").await;
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        second.headers().get(SENTIGATE_STATUS_HEADER).unwrap(),
        "rate_limited"
    );

    let retry_after: u64 = second
        .headers()
        .get("retry-after")
        .unwrap()
        .to_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!(retry_after >= 1);
}

#[tokio::test]
async fn model_failure_returns_502() {
    let router = test_router(MockModelAdapter::failing(), 60);

    let response = post_analyze(&router, "fine words", "client-a").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.headers().get(SENTIGATE_STATUS_HEADER).unwrap(),
        "model_error"
    );
}

#[tokio::test]
async fn missing_client_header_shares_anonymous_quota() {
    let router = test_router(MockModelAdapter::new(), 1);

    let request = |text: &str| {
        Request::builder()
            .method("POST")
            .uri("/api/v1/sentiment/analyze")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::json!({ "text": text }).to_string()))
            .unwrap()
    };

    let first = router.clone().oneshot(request("fine words")).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = router.clone().oneshot(request("other words")).await.unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
}
