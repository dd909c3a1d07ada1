use thiserror::Error;

/// Errors returned by a [`ResultStore`](super::ResultStore) backend.
///
/// The cache is an optimization, not a correctness dependency: the
/// orchestrator logs these and degrades to a miss, never surfacing them to
/// the caller.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The backing store rejected the operation.
    #[error("cache backend failure: {reason}")]
    Backend {
        /// Error message.
        reason: String,
    },
}
