//! # Messages
//!
//! A `Msg` is the unit handed between producers, queue storage and
//! consumers. It is move-only: there is no way to duplicate one, so a
//! message identity is only ever observed at a single owner.

use crate::uid::{MsgUid, UidSource, UniqueIdGenerator};
use std::any::Any;
use std::fmt;

/// Application-defined message kind.
pub type MsgId = i32;

/// Reserved `MsgId` for the sentinel injected by `Queue::get` on timeout.
///
/// Application message kinds must not use this value.
pub const MSG_TIMEOUT: MsgId = -1;

/// An identity-bearing, ownership-transferable message.
///
/// Optionally carries one owned payload of any `Send + 'static` type.
///
/// A message has exactly one owner. Handing it to a queue moves it, so the
/// former handle cannot be used afterwards:
///
/// ```compile_fail
/// use msgq_core::{Msg, Queue};
///
/// let queue = Queue::new();
/// let msg = Msg::new(1);
/// queue.put(msg);
/// let _ = msg.unique_id();
/// ```
///
/// and there is no way to duplicate one:
///
/// ```compile_fail
/// use msgq_core::Msg;
///
/// let msg = Msg::new(1);
/// let _copy = msg.clone();
/// ```
pub struct Msg {
    /// Application tag.
    msg_id: MsgId,
    /// Assigned once at construction.
    unique_id: MsgUid,
    /// Type-erased payload for data messages.
    payload: Option<Box<dyn Any + Send>>,
}

impl Msg {
    /// Create a message with a fresh id from the process-wide generator.
    #[must_use]
    pub fn new(msg_id: MsgId) -> Self {
        Self::new_with(UniqueIdGenerator::global(), msg_id)
    }

    /// Create a message drawing its id from `source`.
    #[must_use]
    pub fn new_with(source: &dyn UidSource, msg_id: MsgId) -> Self {
        Self {
            msg_id,
            unique_id: source.next_uid(),
            payload: None,
        }
    }

    /// Create a data message carrying `payload`.
    #[must_use]
    pub fn with_payload<T: Any + Send>(msg_id: MsgId, payload: T) -> Self {
        let mut msg = Self::new(msg_id);
        msg.payload = Some(Box::new(payload));
        msg
    }

    /// Synthetic sentinel returned when a bounded `get` expires.
    pub(crate) fn timeout() -> Self {
        Self::new(MSG_TIMEOUT)
    }

    /// Application message kind.
    #[must_use]
    pub fn msg_id(&self) -> MsgId {
        self.msg_id
    }

    /// Process-unique id of this message.
    #[must_use]
    pub fn unique_id(&self) -> MsgUid {
        self.unique_id
    }

    /// Whether this is the synthetic timeout sentinel.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.msg_id == MSG_TIMEOUT
    }

    /// Whether a payload is attached.
    #[must_use]
    pub fn has_payload(&self) -> bool {
        self.payload.is_some()
    }

    /// Borrow the payload if it is a `T`.
    #[must_use]
    pub fn payload<T: Any + Send>(&self) -> Option<&T> {
        self.payload.as_deref()?.downcast_ref::<T>()
    }

    /// Mutably borrow the payload if it is a `T`.
    pub fn payload_mut<T: Any + Send>(&mut self) -> Option<&mut T> {
        self.payload.as_deref_mut()?.downcast_mut::<T>()
    }

    /// Take the payload out if it is a `T`.
    ///
    /// On a type mismatch the payload stays attached and `None` is returned.
    pub fn take_payload<T: Any + Send>(&mut self) -> Option<T> {
        let boxed = self.payload.take()?;
        match boxed.downcast::<T>() {
            Ok(value) => Some(*value),
            Err(original) => {
                self.payload = Some(original);
                None
            }
        }
    }
}

impl fmt::Debug for Msg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Msg")
            .field("msg_id", &self.msg_id)
            .field("unique_id", &self.unique_id)
            .field("has_payload", &self.payload.is_some())
            .finish()
    }
}
