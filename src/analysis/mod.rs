//! Request orchestration: normalize → admit → cache → infer → populate.

pub mod error;
mod types;


pub use error::AnalysisError;
pub use types::{AnalysisOutcome, ScoreEntry, SentimentResult};

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument, warn};

use crate::cache::{CacheStatus, ResultStore};
use crate::hashing::{client_key, text_key};
use crate::limiter::{Decision, RateLimiter};
use crate::model::ModelAdapter;
use crate::normalize::TextNormalizer;

/// Composes the pipeline components into the single `analyze` operation.
///
/// Ordering is deliberate: normalization runs before admission so malformed
/// requests never consume quota, and the cache is consulted before the model
/// so a hit is terminal. Every component is constructor-injected; the
/// orchestrator owns them for its lifetime and nothing here is a singleton.
pub struct AnalysisOrchestrator<M: ModelAdapter, C: ResultStore> {
    normalizer: TextNormalizer,
    limiter: RateLimiter,
    cache: C,
    adapter: M,
    cache_ttl: Duration,
}

impl<M: ModelAdapter, C: ResultStore> AnalysisOrchestrator<M, C> {
    /// Wires the pipeline together. `cache_ttl` applies to every stored result.
    pub fn new(
        normalizer: TextNormalizer,
        limiter: RateLimiter,
        cache: C,
        adapter: M,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            normalizer,
            limiter,
            cache,
            adapter,
            cache_ttl,
        }
    }

    /// Identifier of the model backing this pipeline.
    pub fn model_name(&self) -> &str {
        self.adapter.model_name()
    }

    /// Scores `raw_text` on behalf of `client_id`.
    #[instrument(skip(self, raw_text), fields(text_len = raw_text.len(), client_id = client_id))]
    pub async fn analyze(
        &self,
        raw_text: &str,
        client_id: &str,
    ) -> Result<AnalysisOutcome, AnalysisError> {
        self.analyze_at(raw_text, client_id, Instant::now()).await
    }

    /// Clock-injected variant of [`analyze`](Self::analyze).
    pub async fn analyze_at(
        &self,
        raw_text: &str,
        client_id: &str,
        now: Instant,
    ) -> Result<AnalysisOutcome, AnalysisError> {
        let normalized = self.normalizer.normalize(raw_text)?;

        let client = client_key(client_id);
        if let Decision::Rejected { retry_after } = self.limiter.admit_at(client, now) {
            debug!(?retry_after, "admission rejected");
            return Err(AnalysisError::RateLimitExceeded { retry_after });
        }

        let key = text_key(normalized.as_str());
        match self.cache.fetch(&key, now) {
            Ok(Some(result)) => {
                info!("cache hit");
                return Ok(AnalysisOutcome {
                    result,
                    status: CacheStatus::Hit,
                });
            }
            Ok(None) => debug!("cache miss"),
            Err(e) => warn!(error = %e, "cache fetch failed, treating as miss"),
        }

        // No lock is held across this await; the adapter may be slow.
        let scores = self.adapter.score(normalized.as_str()).await?;
        let result = Arc::new(SentimentResult::new(
            raw_text,
            self.adapter.model_name(),
            scores,
        ));

        if let Err(e) = self
            .cache
            .store(key, Arc::clone(&result), self.cache_ttl, now)
        {
            warn!(error = %e, "cache store failed, result not cached");
        }

        Ok(AnalysisOutcome {
            result,
            status: CacheStatus::Miss,
        })
    }
}
