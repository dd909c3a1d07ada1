//! Deterministic mock adapter for tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;
use tokio::sync::Barrier;

use super::error::ModelError;
use super::ModelAdapter;
use crate::analysis::ScoreEntry;

/// Returns canned scores and counts invocations.
#[derive(Clone)]
pub struct MockModelAdapter {
    model_name: String,
    scores: Arc<Mutex<Vec<ScoreEntry>>>,
    fail: Arc<AtomicBool>,
    calls: Arc<AtomicUsize>,
    barrier: Option<Arc<Barrier>>,
}

impl MockModelAdapter {
    /// Canned default: unsorted scores so callers can assert ordering.
    pub fn new() -> Self {
        Self::with_scores(vec![
            ScoreEntry {
                label: "neutral".to_string(),
                score: 0.06,
            },
            ScoreEntry {
                label: "positive".to_string(),
                score: 0.91,
            },
            ScoreEntry {
                label: "negative".to_string(),
                score: 0.03,
            },
        ])
    }

    /// Mock answering with exactly `scores`.
    pub fn with_scores(scores: Vec<ScoreEntry>) -> Self {
        Self {
            model_name: "mock-sentiment".to_string(),
            scores: Arc::new(Mutex::new(scores)),
            fail: Arc::new(AtomicBool::new(false)),
            calls: Arc::new(AtomicUsize::new(0)),
            barrier: None,
        }
    }

    /// Mock whose every invocation fails.
    pub fn failing() -> Self {
        let mock = Self::new();
        mock.set_fail(true);
        mock
    }

    /// Mock that blocks each invocation on `barrier`, for forcing concurrent
    /// in-flight computations.
    pub fn with_barrier(barrier: Arc<Barrier>) -> Self {
        let mut mock = Self::new();
        mock.barrier = Some(barrier);
        mock
    }

    /// Number of `score` invocations so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Toggles failure mode.
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Replaces the canned scores.
    pub fn set_scores(&self, scores: Vec<ScoreEntry>) {
        *self.scores.lock() = scores;
    }
}

impl Default for MockModelAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelAdapter for MockModelAdapter {
    async fn score(&self, _text: &str) -> Result<Vec<ScoreEntry>, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        if self.fail.load(Ordering::SeqCst) {
            return Err(ModelError::InvalidOutput {
                reason: "mock failure".to_string(),
            });
        }

        Ok(self.scores.lock().clone())
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
