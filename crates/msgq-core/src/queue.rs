//! # Message Queue
//!
//! Thread-safe, unbounded FIFO of owned messages with blocking and bounded
//! retrieval, plus synchronous request/response on top of it.
//!
//! ## Locking
//!
//! Two independent domains per queue:
//!
//! - the FIFO (`Mutex<VecDeque<Msg>>` + `not_empty` condvar)
//! - the `ResponseRegistry` (its own mutex)
//!
//! The registry lock is always released before a blocking FIFO wait.

use crate::error::QueueError;
use crate::msg::Msg;
use crate::registry::ResponseRegistry;
use crate::stats::{QueueStats, QueueStatsSnapshot};
use crate::uid::MsgUid;
use crate::BLOCK_FOREVER;
use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

const DEFAULT_LABEL: &str = "anonymous";

/// Blocking FIFO message queue with request/response correlation.
pub struct Queue {
    /// Name used in log fields.
    label: String,
    /// Pending messages in arrival order.
    fifo: Mutex<VecDeque<Msg>>,
    /// Signalled once per `put`.
    not_empty: Condvar,
    /// Requests waiting for a response.
    responses: ResponseRegistry,
    stats: QueueStats,
}

impl Queue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::named(DEFAULT_LABEL)
    }

    /// Create an empty queue whose log events carry `label`.
    #[must_use]
    pub fn named(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fifo: Mutex::new(VecDeque::new()),
            not_empty: Condvar::new(),
            responses: ResponseRegistry::new(),
            stats: QueueStats::default(),
        }
    }

    /// Label given at construction.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Append `msg` and wake one waiting consumer. Never blocks beyond the
    /// critical section.
    pub fn put(&self, msg: Msg) {
        let uid = msg.unique_id();
        let msg_id = msg.msg_id();

        self.fifo.lock().push_back(msg);
        self.not_empty.notify_one();

        QueueStats::incr(&self.stats.puts);
        trace!(queue = %self.label, uid, msg_id, "Message put");
    }

    /// Remove and return the front message.
    ///
    /// - `timeout_millis <= 0`: block until a message is available.
    /// - `timeout_millis > 0`: wait at most that long; on expiry a
    ///   `MSG_TIMEOUT` sentinel is returned instead.
    pub fn get(&self, timeout_millis: i64) -> Msg {
        let deadline = if timeout_millis <= 0 {
            None
        } else {
            Instant::now().checked_add(Duration::from_millis(timeout_millis.unsigned_abs()))
        };

        let msg = match self.pop_until(deadline) {
            Some(msg) => msg,
            None => {
                QueueStats::incr(&self.stats.timeouts);
                debug!(queue = %self.label, timeout_ms = timeout_millis, "Get timed out");
                Msg::timeout()
            }
        };

        QueueStats::incr(&self.stats.gets);
        trace!(queue = %self.label, uid = msg.unique_id(), msg_id = msg.msg_id(), "Message got");
        msg
    }

    /// Block until a message is available and return it.
    pub fn get_blocking(&self) -> Msg {
        self.get(BLOCK_FOREVER)
    }

    /// Return the front message if one is queued. Never blocks on an empty
    /// queue and never produces a timeout sentinel.
    pub fn try_get(&self) -> Option<Msg> {
        let msg = self.fifo.lock().pop_front()?;
        QueueStats::incr(&self.stats.gets);
        Some(msg)
    }

    /// Send `msg` through this queue and block until a correlated response
    /// arrives via `respond_to`.
    ///
    /// Blocks forever if nobody answers. Use `request_timeout` for a bound.
    pub fn request(&self, msg: Msg) -> Msg {
        let uid = msg.unique_id();
        let responses = self.begin_request(msg);

        let response = responses.get(BLOCK_FOREVER);
        self.finish_request(uid, &responses);

        debug!(
            queue = %self.label,
            uid,
            response_uid = response.unique_id(),
            "Request answered"
        );
        response
    }

    /// Like `request`, but gives up after `timeout`.
    ///
    /// On expiry the correlation is erased, so a late `respond_to` for this
    /// request is dropped.
    ///
    /// # Errors
    ///
    /// - `QueueError::RequestTimedOut` - No response arrived in time
    pub fn request_timeout(&self, msg: Msg, timeout: Duration) -> Result<Msg, QueueError> {
        let uid = msg.unique_id();
        let started = Instant::now();
        let responses = self.begin_request(msg);

        if let Some(response) = responses.pop_until(started.checked_add(timeout)) {
            self.finish_request(uid, &responses);
            return Ok(response);
        }

        self.responses.remove(uid);
        // Delivery happens under the registry lock, so nothing can arrive
        // after the erase; pick up a response that beat it.
        if let Some(response) = responses.try_get() {
            self.finish_request(uid, &responses);
            return Ok(response);
        }

        let waited_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        debug!(queue = %self.label, uid, waited_ms, "Request timed out");
        Err(QueueError::RequestTimedOut { uid, waited_ms })
    }

    /// Deliver `response` to the requester waiting on `req_uid`.
    ///
    /// If no request is pending under that id (already answered, timed out,
    /// or unknown) the response is silently dropped.
    pub fn respond_to(&self, req_uid: MsgUid, response: Msg) {
        let response_uid = response.unique_id();
        if self.responses.deliver(req_uid, response) {
            // Counted as delivered once the requester picks it up
            debug!(queue = %self.label, uid = req_uid, response_uid, "Response routed");
        } else {
            QueueStats::incr(&self.stats.responses_dropped);
            debug!(
                queue = %self.label,
                uid = req_uid,
                response_uid,
                "Response dropped (no pending request)"
            );
        }
    }

    /// Number of queued messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fifo.lock().len()
    }

    /// Whether no message is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fifo.lock().is_empty()
    }

    /// Number of requests still waiting for a response.
    #[must_use]
    pub fn pending_requests(&self) -> usize {
        self.responses.len()
    }

    /// Counter snapshot.
    #[must_use]
    pub fn stats(&self) -> QueueStatsSnapshot {
        self.stats.snapshot()
    }

    /// Register the correlation, then publish the request.
    fn begin_request(&self, msg: Msg) -> Arc<Queue> {
        let uid = msg.unique_id();
        let responses = self.responses.register(uid);

        QueueStats::incr(&self.stats.requests);
        debug!(queue = %self.label, uid, msg_id = msg.msg_id(), "Request sent");

        self.put(msg);
        responses
    }

    /// Erase the correlation after the requester got its response.
    ///
    /// Extra answers that reached the response queue before the erase never
    /// reach anyone; they are counted as dropped.
    fn finish_request(&self, uid: MsgUid, responses: &Queue) {
        self.responses.remove(uid);
        QueueStats::incr(&self.stats.responses_delivered);

        while let Some(extra) = responses.try_get() {
            QueueStats::incr(&self.stats.responses_dropped);
            debug!(
                queue = %self.label,
                uid,
                response_uid = extra.unique_id(),
                "Response dropped (request already answered)"
            );
        }
    }

    /// Pop the front message, waiting until `deadline` (or forever).
    fn pop_until(&self, deadline: Option<Instant>) -> Option<Msg> {
        let mut fifo = self.fifo.lock();
        loop {
            if let Some(msg) = fifo.pop_front() {
                return Some(msg);
            }
            match deadline {
                None => self.not_empty.wait(&mut fifo),
                Some(deadline) => {
                    if self.not_empty.wait_until(&mut fifo, deadline).timed_out() {
                        return fifo.pop_front();
                    }
                }
            }
        }
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Queue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Queue")
            .field("label", &self.label)
            .field("len", &self.len())
            .field("pending_requests", &self.pending_requests())
            .finish()
    }
}
