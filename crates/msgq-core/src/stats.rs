//! # Queue Statistics
//!
//! Lock-free counters updated by every queue operation.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Live counters for one queue.
#[derive(Debug, Default)]
pub struct QueueStats {
    /// Messages appended by `put` (including responses routed through it).
    pub puts: AtomicU64,
    /// Messages handed out by `get`/`try_get`.
    pub gets: AtomicU64,
    /// Timeout sentinels injected by bounded `get`.
    pub timeouts: AtomicU64,
    /// `request` calls started.
    pub requests: AtomicU64,
    /// Responses handed to the requester that was waiting for them.
    pub responses_delivered: AtomicU64,
    /// Responses that reached no requester (no correlation pending, or a
    /// duplicate answer to a request that was already answered).
    pub responses_dropped: AtomicU64,
}

/// Point-in-time copy of `QueueStats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStatsSnapshot {
    pub puts: u64,
    pub gets: u64,
    pub timeouts: u64,
    pub requests: u64,
    pub responses_delivered: u64,
    pub responses_dropped: u64,
}

impl QueueStats {
    pub(crate) fn incr(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Copy the current counter values.
    #[must_use]
    pub fn snapshot(&self) -> QueueStatsSnapshot {
        QueueStatsSnapshot {
            puts: self.puts.load(Ordering::Relaxed),
            gets: self.gets.load(Ordering::Relaxed),
            timeouts: self.timeouts.load(Ordering::Relaxed),
            requests: self.requests.load(Ordering::Relaxed),
            responses_delivered: self.responses_delivered.load(Ordering::Relaxed),
            responses_dropped: self.responses_dropped.load(Ordering::Relaxed),
        }
    }
}
