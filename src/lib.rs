//! Sentigate library crate (used by the server binary and integration tests).
//!
//! The core is the request-orchestration pipeline between the HTTP layer and
//! the sentiment model: normalize → admit → cache lookup → inference →
//! populate. Everything time-dependent takes an explicit `now` so tests can
//! inject arbitrary clocks.
//!
//! # Public API Surface
//!
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`TextNormalizer`], [`NormalizedText`] - Canonical text form
//! - [`RateLimiter`], [`Decision`] - Per-client admission control
//! - [`MemoryCache`], [`ResultStore`], [`CacheStatus`] - Result cache
//! - [`ModelAdapter`], [`HttpModelAdapter`] - Classifier seam
//! - [`AnalysisOrchestrator`], [`AnalysisError`] - The pipeline root
//! - Hashing functions for cache keys and client ids
//!
//! # Test/Mock Support
//!
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod analysis;
pub mod cache;
pub mod config;
pub mod gateway;
pub mod hashing;
pub mod limiter;
pub mod model;
pub mod normalize;

pub use analysis::{
    AnalysisError, AnalysisOrchestrator, AnalysisOutcome, ScoreEntry, SentimentResult,
};
#[cfg(any(test, feature = "mock"))]
pub use cache::FailingStore;
pub use cache::{
    CacheEntry, CacheError, CacheStatus, MemoryCache, ResultStore, SENTIGATE_STATUS_HEADER,
};
pub use config::{Config, ConfigError};
pub use hashing::{client_key, text_key};
pub use limiter::{Decision, RateLimiter};
#[cfg(any(test, feature = "mock"))]
pub use model::MockModelAdapter;
pub use model::{HttpModelAdapter, ModelAdapter, ModelError};
pub use normalize::{NormalizeError, NormalizedText, TextNormalizer};
