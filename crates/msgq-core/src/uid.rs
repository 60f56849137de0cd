//! # Unique Id Generation
//!
//! Issues collision-free, monotonically increasing message ids.
//!
//! Each call increments first and then returns the new value, so the first
//! id is 1 and 0 stays reserved as "absent".

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique message identifier.
pub type MsgUid = u64;

/// Source of message ids.
///
/// `Msg::new` uses the process-wide generator; tests can pass their own
/// source to `Msg::new_with` for deterministic ids.
pub trait UidSource: Send + Sync {
    /// Issue the next id. Never returns 0 and never repeats.
    fn next_uid(&self) -> MsgUid;
}

/// Atomic counter issuing message ids.
#[derive(Debug)]
pub struct UniqueIdGenerator {
    /// Last issued id (0 before the first call).
    last: AtomicU64,
}

impl UniqueIdGenerator {
    /// Create a generator whose first id will be 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    /// The process-wide generator backing `Msg::new`.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Last issued id, or 0 if nothing has been issued yet.
    #[must_use]
    pub fn peek(&self) -> MsgUid {
        self.last.load(Ordering::Acquire)
    }
}

impl Default for UniqueIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl UidSource for UniqueIdGenerator {
    fn next_uid(&self) -> MsgUid {
        self.last.fetch_add(1, Ordering::AcqRel) + 1
    }
}

static GLOBAL: UniqueIdGenerator = UniqueIdGenerator::new();
