use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
};
use tracing::instrument;

use super::error::ApiError;
use super::payload::{AnalyzeRequest, AnalyzeResponse};
use super::state::HandlerState;
use crate::cache::{ResultStore, SENTIGATE_STATUS_HEADER};
use crate::model::ModelAdapter;

/// Header carrying the caller's client identity.
pub const CLIENT_ID_HEADER: &str = "X-Client-Id";

/// Identity used when the client header is absent or blank. All anonymous
/// callers share one quota window.
pub const ANONYMOUS_CLIENT: &str = "anonymous";

#[instrument(skip(state, headers, request), fields(text_len = request.text.len()))]
pub async fn analyze_handler<M, C>(
    State(state): State<HandlerState<M, C>>,
    headers: HeaderMap,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Response, ApiError>
where
    M: ModelAdapter + 'static,
    C: ResultStore + 'static,
{
    let client_id = headers
        .get(CLIENT_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(ANONYMOUS_CLIENT);

    let outcome = state.orchestrator.analyze(&request.text, client_id).await?;

    let mut response_headers = HeaderMap::new();
    response_headers.insert(
        SENTIGATE_STATUS_HEADER,
        HeaderValue::from_static(outcome.status.as_header_value()),
    );

    let body = Json(AnalyzeResponse::from(outcome.result.as_ref()));
    Ok((response_headers, body).into_response())
}
