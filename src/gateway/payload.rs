use serde::{Deserialize, Serialize};

use crate::analysis::{ScoreEntry, SentimentResult};

/// Body of `POST /api/v1/sentiment/analyze`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Response for a scored text.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub text: String,
    pub scores: Vec<ScoreEntry>,
    pub model: String,
}

impl From<&SentimentResult> for AnalyzeResponse {
    fn from(result: &SentimentResult) -> Self {
        Self {
            text: result.original_text.clone(),
            scores: result.scores.clone(),
            model: result.model_name.clone(),
        }
    }
}
