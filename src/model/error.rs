use thiserror::Error;

/// Errors returned by a [`ModelAdapter`](super::ModelAdapter).
///
/// The orchestrator surfaces these as-is and never caches the failure; retry
/// policy belongs to the transport layer.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Transport-level failure reaching the model (includes timeouts).
    #[error("model request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The model answered with a non-success status.
    #[error("model returned status {status}: {body}")]
    BadStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, best effort.
        body: String,
    },

    /// The response payload did not parse into label/score pairs.
    #[error("invalid model output: {reason}")]
    InvalidOutput {
        /// Error message.
        reason: String,
    },

    /// A well-formed response carried no usable predictions.
    #[error("no valid sentiment predictions")]
    EmptyPrediction,
}
