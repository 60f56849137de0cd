//! # msgq Core - In-Process Message Passing
//!
//! Identity-bearing messages and a thread-safe FIFO queue that supports both
//! fire-and-forget delivery and synchronous request/response correlation.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │  Requester   │  request(msg)      │  Responder   │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!        ↑               ▼                 │     │
//!        │         ┌──────────────┐  get() │     │ respond_to(uid, reply)
//!        │         │    Queue     │ ───────┘     │
//!        │         └──────────────┘              │
//!        │         ┌──────────────┐              │
//!        └──────── │ ResponseReg. │ ◄────────────┘
//!                  └──────────────┘
//! ```
//!
//! ## Guarantees
//!
//! - **Unique ids:** every `Msg` gets a process-wide id, first id 1, never 0
//! - **Move-only:** a `Msg` has exactly one owner; there is no `Clone`
//! - **Always a Msg:** `get` with a timeout yields a `MSG_TIMEOUT` sentinel
//!   instead of failing
//! - **Silent orphans:** `respond_to` for an unknown id is a no-op

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod error;
pub mod msg;
pub mod queue;
pub mod registry;
pub mod stats;
pub mod uid;

// Re-export main types
pub use error::QueueError;
pub use msg::{Msg, MsgId, MSG_TIMEOUT};
pub use queue::Queue;
pub use registry::ResponseRegistry;
pub use stats::{QueueStats, QueueStatsSnapshot};
pub use uid::{MsgUid, UidSource, UniqueIdGenerator};

/// Timeout value that makes `Queue::get` block until a message arrives.
pub const BLOCK_FOREVER: i64 = 0;
