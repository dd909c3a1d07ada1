//! Per-client request admission over a fixed time window.
//!
//! Each client id maps to a [`RateWindow`]; the read-increment-write sequence
//! runs under one lock so two concurrent admissions can never both slip past
//! the quota. The client table is bounded: at capacity the least-recently-seen
//! client is evicted, trading a rare false fresh window for bounded memory.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Admission decision for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Request admitted; the client's window count was incremented.
    Allowed,
    /// Request denied; the current window resets after `retry_after`.
    Rejected {
        /// Time remaining until the client's window resets.
        retry_after: Duration,
    },
}

impl Decision {
    /// Returns `true` if the request was admitted.
    #[inline]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }
}

#[derive(Debug)]
struct RateWindow {
    window_start: Instant,
    count: u32,
    last_seen: u64,
}

#[derive(Debug, Default)]
struct LimiterTable {
    windows: HashMap<u64, RateWindow>,
    tick: u64,
}

/// Fixed-window rate limiter with an LRU-bounded client table.
#[derive(Debug)]
pub struct RateLimiter {
    quota: u32,
    window: Duration,
    max_clients: usize,
    inner: Mutex<LimiterTable>,
}

impl RateLimiter {
    /// Creates a limiter admitting `quota` requests per `window` per client,
    /// tracking at most `max_clients` clients.
    pub fn new(quota: u32, window: Duration, max_clients: usize) -> Self {
        Self {
            quota,
            window,
            max_clients,
            inner: Mutex::new(LimiterTable::default()),
        }
    }

    /// Admits or rejects a request from `client` at the current instant.
    #[inline]
    pub fn admit(&self, client: u64) -> Decision {
        self.admit_at(client, Instant::now())
    }

    /// Clock-injected variant of [`admit`](Self::admit).
    pub fn admit_at(&self, client: u64, now: Instant) -> Decision {
        if self.quota == 0 {
            return Decision::Rejected {
                retry_after: self.window,
            };
        }

        let mut table = self.inner.lock();
        table.tick += 1;
        let tick = table.tick;

        if let Some(win) = table.windows.get_mut(&client) {
            win.last_seen = tick;
            let elapsed = now.saturating_duration_since(win.window_start);
            if elapsed >= self.window {
                win.window_start = now;
                win.count = 1;
                return Decision::Allowed;
            }
            if win.count < self.quota {
                win.count += 1;
                return Decision::Allowed;
            }
            return Decision::Rejected {
                retry_after: self.window - elapsed,
            };
        }

        if table.windows.len() >= self.max_clients {
            let oldest = table
                .windows
                .iter()
                .min_by_key(|(_, win)| win.last_seen)
                .map(|(&id, _)| id);
            if let Some(id) = oldest {
                table.windows.remove(&id);
            }
        }

        table.windows.insert(
            client,
            RateWindow {
                window_start: now,
                count: 1,
                last_seen: tick,
            },
        );
        Decision::Allowed
    }

    /// Number of clients currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.inner.lock().windows.len()
    }
}
