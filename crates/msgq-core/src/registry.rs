//! # Response Registry
//!
//! Maps a request's unique id to the ephemeral queue its requester is
//! blocked on. Guarded by its own lock, independent of the FIFO lock of the
//! owning queue, and never held across a blocking wait.

use crate::msg::Msg;
use crate::queue::Queue;
use crate::uid::MsgUid;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{trace, warn};

/// Correlation table from request id to response queue.
#[derive(Default)]
pub struct ResponseRegistry {
    pending: Mutex<HashMap<MsgUid, Arc<Queue>>>,
}

impl ResponseRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register a fresh response queue for `uid`.
    pub fn register(&self, uid: MsgUid) -> Arc<Queue> {
        let queue = Arc::new(Queue::named(format!("response-{uid}")));
        let replaced = self.pending.lock().insert(uid, queue.clone());
        if replaced.is_some() {
            warn!(uid, "Replaced an existing correlation for the same id");
        }
        trace!(uid, "Correlation registered");
        queue
    }

    /// Route `response` to the queue registered for `uid`.
    ///
    /// The put happens under the registry lock so a concurrent `remove`
    /// cannot detach the queue between lookup and delivery. Returns `false`
    /// and drops the response when nothing is registered.
    pub fn deliver(&self, uid: MsgUid, response: Msg) -> bool {
        let pending = self.pending.lock();
        match pending.get(&uid) {
            Some(queue) => {
                queue.put(response);
                true
            }
            None => false,
        }
    }

    /// Erase the correlation for `uid`. Returns whether it existed.
    pub fn remove(&self, uid: MsgUid) -> bool {
        let removed = self.pending.lock().remove(&uid).is_some();
        if removed {
            trace!(uid, "Correlation erased");
        }
        removed
    }

    /// Whether a correlation for `uid` is pending.
    #[must_use]
    pub fn contains(&self, uid: MsgUid) -> bool {
        self.pending.lock().contains_key(&uid)
    }

    /// Number of pending correlations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    /// Whether no correlation is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }
}
