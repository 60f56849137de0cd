//! Service threads shared by the scenarios and benchmarks.

use msgq_core::{Msg, MsgId, Queue};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::debug;

/// Request kind answered by the ping service.
pub const MSG_PING: MsgId = 1;
/// Response kind produced by the ping service.
pub const MSG_PONG: MsgId = 2;
/// Stops a service loop.
pub const MSG_STOP: MsgId = 99;

/// Spawn a thread answering every `MSG_PING` on `queue` with a `MSG_PONG`
/// whose `u64` payload is the request payload plus one.
///
/// Runs until it receives `MSG_STOP`; returns the number of pings answered.
pub fn spawn_ping_service(queue: Arc<Queue>) -> JoinHandle<u64> {
    thread::spawn(move || {
        let mut answered = 0;
        loop {
            let mut msg = queue.get_blocking();
            match msg.msg_id() {
                MSG_STOP => break,
                MSG_PING => {
                    let value = msg.take_payload::<u64>().unwrap_or(0);
                    queue.respond_to(msg.unique_id(), Msg::with_payload(MSG_PONG, value + 1));
                    answered += 1;
                }
                other => debug!(msg_id = other, "Ping service ignored message"),
            }
        }
        answered
    })
}

/// Ask the service loop on `queue` to exit.
pub fn stop_service(queue: &Queue) {
    queue.put(Msg::new(MSG_STOP));
}
