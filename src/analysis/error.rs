use std::time::Duration;

use thiserror::Error;

use crate::model::ModelError;
use crate::normalize::NormalizeError;

/// Caller-facing error taxonomy for
/// [`analyze`](super::AnalysisOrchestrator::analyze).
///
/// Cache failures never appear here: the cache is an optimization and its
/// errors degrade to a miss inside the orchestrator. The core never retries
/// anything on its own.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Input failed normalization constraints. Raised before admission, so a
    /// malformed request never consumes quota.
    #[error("invalid text: {0}")]
    Validation(#[from] NormalizeError),

    /// Admission denied for this client's current window.
    #[error("rate limit exceeded, retry in {retry_after:?}")]
    RateLimitExceeded {
        /// Time remaining until the client's window resets.
        retry_after: Duration,
    },

    /// The model adapter failed or timed out. The failure is not cached.
    #[error("model inference failed: {0}")]
    ModelInference(#[from] ModelError),
}
