use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cache::CacheStatus;

/// One label with its confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub label: String,
    pub score: f32,
}

/// Immutable outcome of one model invocation.
///
/// `scores` is held in canonical order — descending score, ties broken by
/// label lexical order — so identical inputs always serialize identically.
/// Once constructed (and shared as an `Arc` by the cache) a result is never
/// mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub original_text: String,
    pub scores: Vec<ScoreEntry>,
    pub model_name: String,
}

impl SentimentResult {
    /// Builds a result, sorting `scores` into the canonical order.
    pub fn new(
        original_text: impl Into<String>,
        model_name: impl Into<String>,
        mut scores: Vec<ScoreEntry>,
    ) -> Self {
        scores.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.label.cmp(&b.label))
        });
        Self {
            original_text: original_text.into(),
            scores,
            model_name: model_name.into(),
        }
    }

    /// Highest-confidence entry, if any.
    pub fn top(&self) -> Option<&ScoreEntry> {
        self.scores.first()
    }
}

/// Result of [`analyze`](super::AnalysisOrchestrator::analyze) with its cache
/// provenance.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub result: Arc<SentimentResult>,
    pub status: CacheStatus,
}
