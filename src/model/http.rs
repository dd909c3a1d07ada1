//! HTTP adapter for a classifier sidecar.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ModelError;
use super::ModelAdapter;
use crate::analysis::ScoreEntry;

#[derive(Serialize)]
struct ScoreRequest<'a> {
    text: &'a str,
}

/// One prediction as the sidecar reports it. Both fields are optional so a
/// single malformed prediction is skipped instead of failing the batch.
#[derive(Deserialize)]
struct RawPrediction {
    label: Option<String>,
    score: Option<f32>,
}

/// Calls an inference sidecar over HTTP.
///
/// The sidecar contract: `POST {endpoint}` with `{"text": ...}`, answering a
/// JSON array of `{"label": ..., "score": ...}` objects. Labels are folded to
/// lowercase for stable downstream comparison.
#[derive(Debug, Clone)]
pub struct HttpModelAdapter {
    client: reqwest::Client,
    endpoint: String,
    model_name: String,
}

impl HttpModelAdapter {
    /// Per-request ceiling; a sidecar slower than this surfaces as a
    /// [`ModelError::Request`] timeout.
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates an adapter posting to `endpoint`, stamping results with
    /// `model_name`.
    pub fn new(endpoint: impl Into<String>, model_name: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoint: endpoint.into(),
            model_name: model_name.into(),
        }
    }
}

impl ModelAdapter for HttpModelAdapter {
    async fn score(&self, text: &str) -> Result<Vec<ScoreEntry>, ModelError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ScoreRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let raw: Vec<RawPrediction> =
            response
                .json()
                .await
                .map_err(|e| ModelError::InvalidOutput {
                    reason: e.to_string(),
                })?;

        let scores: Vec<ScoreEntry> = raw
            .into_iter()
            .filter_map(|p| match (p.label, p.score) {
                (Some(label), Some(score)) => Some(ScoreEntry {
                    label: label.to_lowercase(),
                    score,
                }),
                _ => {
                    warn!("prediction missing label or score, skipping");
                    None
                }
            })
            .collect();

        if scores.is_empty() {
            return Err(ModelError::EmptyPrediction);
        }

        Ok(scores)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
