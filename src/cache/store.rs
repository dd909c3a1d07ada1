use std::sync::Arc;
use std::time::{Duration, Instant};

use super::error::CacheError;
use crate::analysis::SentimentResult;

/// Seam over the result store so a remote cache can replace the in-memory
/// table without touching the orchestrator.
///
/// Implementations must guarantee that an expired entry is never returned and
/// that concurrent operations on one key never expose a torn value.
pub trait ResultStore: Send + Sync {
    /// Returns the unexpired value for `key`, refreshing its recency.
    fn fetch(
        &self,
        key: &[u8; 32],
        now: Instant,
    ) -> Result<Option<Arc<SentimentResult>>, CacheError>;

    /// Inserts or overwrites `key`, evicting the least-recently-used entry
    /// when the store is full. Storing counts as a use.
    fn store(
        &self,
        key: [u8; 32],
        value: Arc<SentimentResult>,
        ttl: Duration,
        now: Instant,
    ) -> Result<(), CacheError>;
}

/// Store whose every operation fails, for exercising the degraded-cache path.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Default, Clone)]
pub struct FailingStore;

#[cfg(any(test, feature = "mock"))]
impl ResultStore for FailingStore {
    fn fetch(
        &self,
        _key: &[u8; 32],
        _now: Instant,
    ) -> Result<Option<Arc<SentimentResult>>, CacheError> {
        Err(CacheError::Backend {
            reason: "fetch unavailable".to_string(),
        })
    }

    fn store(
        &self,
        _key: [u8; 32],
        _value: Arc<SentimentResult>,
        _ttl: Duration,
        _now: Instant,
    ) -> Result<(), CacheError> {
        Err(CacheError::Backend {
            reason: "store unavailable".to_string(),
        })
    }
}
