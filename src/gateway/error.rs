use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::analysis::AnalysisError;
use crate::cache::SENTIGATE_STATUS_HEADER;

/// Gateway-level wrapper translating the pipeline taxonomy into HTTP.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Analysis(err) = self;

        let (status, gate_status) = match &err {
            AnalysisError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            AnalysisError::RateLimitExceeded { .. } => {
                (StatusCode::TOO_MANY_REQUESTS, "rate_limited")
            }
            AnalysisError::ModelInference(_) => (StatusCode::BAD_GATEWAY, "model_error"),
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            SENTIGATE_STATUS_HEADER,
            HeaderValue::from_static(gate_status),
        );

        if let AnalysisError::RateLimitExceeded { retry_after } = &err {
            // Round up so a client sleeping the advertised seconds lands in
            // the next window.
            let secs = retry_after.as_secs_f64().ceil().max(1.0) as u64;
            headers.insert(
                header::RETRY_AFTER,
                HeaderValue::from_str(&secs.to_string())
                    .unwrap_or(HeaderValue::from_static("1")),
            );
        }

        let body = Json(ErrorResponse {
            error: err.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
