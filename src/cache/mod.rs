//! Bounded, TTL-expiring result cache keyed on normalized text.
//!
//! The in-memory table is the only implementation; [`ResultStore`] is the
//! seam a remote cache would plug into. Expiry is a pure function of
//! `(entry, now)` — there are no background sweeps, expired entries are
//! purged on access.

pub mod error;
pub mod memory;
pub mod store;
pub mod types;


pub use error::CacheError;
pub use memory::MemoryCache;
#[cfg(any(test, feature = "mock"))]
pub use store::FailingStore;
pub use store::ResultStore;
pub use types::{CacheEntry, CacheStatus, SENTIGATE_STATUS_HEADER};
