use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::analysis::SentimentResult;

/// Response header carrying cache provenance (and gateway error codes).
pub const SENTIGATE_STATUS_HEADER: &str = "X-Sentigate-Status";

/// Where an analysis result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheStatus {
    /// Served from the result cache; the model was not invoked.
    Hit,
    /// Computed by the model and freshly cached.
    Miss,
}

impl CacheStatus {
    /// Header value for this status.
    #[inline]
    pub fn as_header_value(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "HIT",
            CacheStatus::Miss => "MISS",
        }
    }

    /// Returns `true` for a cache hit.
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheStatus::Hit)
    }
}

impl std::fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_header_value())
    }
}

/// A single cached result with its expiry and recency bookkeeping.
///
/// The value is shared as an `Arc`: publishing a result is a single reference
/// swap, so readers can never observe a torn entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: Arc<SentimentResult>,
    pub created_at: Instant,
    pub expires_at: Instant,
    pub(crate) last_used: u64,
}

impl CacheEntry {
    pub(crate) fn new(value: Arc<SentimentResult>, ttl: Duration, now: Instant, tick: u64) -> Self {
        Self {
            value,
            created_at: now,
            expires_at: now + ttl,
            last_used: tick,
        }
    }

    /// Expiry as a pure function of the entry and a caller-supplied instant.
    ///
    /// An entry is live through `expires_at` inclusive.
    #[inline]
    pub fn is_expired(&self, now: Instant) -> bool {
        now > self.expires_at
    }
}
