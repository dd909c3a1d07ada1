//! HTTP gateway (axum) for the sentiment analysis pipeline.
//!
//! This module is primarily used by the `sentigate` server binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;

#[cfg(test)]
mod handler_tests;

use axum::{
    Json, Router,
    http::{HeaderMap, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use handler::analyze_handler;
pub use state::HandlerState;

use crate::cache::{ResultStore, SENTIGATE_STATUS_HEADER};
use crate::model::ModelAdapter;

/// Builds the service router over `state`.
pub fn create_router_with_state<M, C>(state: HandlerState<M, C>) -> Router
where
    M: ModelAdapter + 'static,
    C: ResultStore + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/api/v1/sentiment/analyze", post(analyze_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(SENTIGATE_STATUS_HEADER, HeaderValue::from_static("healthy"));

    (headers, Json(HealthResponse { status: "ok" })).into_response()
}
