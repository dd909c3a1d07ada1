//! Model adapter seam.
//!
//! The pipeline treats the classifier as an opaque, possibly slow, possibly
//! failing collaborator. [`HttpModelAdapter`] talks to an inference sidecar;
//! the mock lives behind `#[cfg(any(test, feature = "mock"))]`.

mod error;
mod http;
#[cfg(any(test, feature = "mock"))]
mod mock;

pub use error::ModelError;
pub use http::HttpModelAdapter;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockModelAdapter;

use crate::analysis::ScoreEntry;

/// An opaque sentiment classifier.
///
/// Implementations receive already-normalized text and return one confidence
/// per label, in no particular order. Labels the pipeline has never seen pass
/// through untouched so model upgrades don't break callers.
pub trait ModelAdapter: Send + Sync {
    /// Scores `text`, returning label/confidence pairs.
    fn score(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<Vec<ScoreEntry>, ModelError>> + Send;

    /// Opaque model identifier forwarded into results.
    fn model_name(&self) -> &str;
}
