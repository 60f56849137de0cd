//! # Error Types
//!
//! The core queue operations are infallible. Only the opt-in bounded
//! request path can fail.

use crate::uid::MsgUid;
use thiserror::Error;

/// Errors from queue operations that accept a bound.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueueError {
    /// No response arrived before the deadline; the correlation was erased.
    #[error("Request {uid} timed out after {waited_ms}ms without a response")]
    RequestTimedOut { uid: MsgUid, waited_ms: u64 },
}
