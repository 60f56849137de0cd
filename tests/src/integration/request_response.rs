//! # Request/Response Scenarios
//!
//! A ping service answers requests from several client threads over one
//! shared inbox queue.

#[cfg(test)]
mod tests {
    use crate::harness::{spawn_ping_service, stop_service, MSG_PING, MSG_PONG};
    use msgq_core::{Msg, Queue, QueueError};
    use msgq_telemetry::{init_logging, LogConfig};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn quiet_logging() {
        let config = LogConfig {
            log_level: "warn".to_string(),
            ..LogConfig::default()
        };
        // Another test may already have installed the subscriber
        let _ = init_logging(&config);
    }

    #[test]
    fn test_many_clients_share_one_service() {
        quiet_logging();
        let inbox = Arc::new(Queue::named("ping-inbox"));
        let service = spawn_ping_service(inbox.clone());

        let clients: Vec<_> = (0..8u64)
            .map(|client| {
                let inbox = inbox.clone();
                thread::spawn(move || {
                    for round in 0..25u64 {
                        let value = client * 1000 + round;
                        let mut reply = inbox.request(Msg::with_payload(MSG_PING, value));
                        assert_eq!(reply.msg_id(), MSG_PONG);
                        assert_eq!(reply.take_payload::<u64>(), Some(value + 1));
                    }
                })
            })
            .collect();

        for client in clients {
            client.join().unwrap();
        }
        stop_service(&inbox);

        assert_eq!(service.join().unwrap(), 200);
        assert_eq!(inbox.pending_requests(), 0);

        let stats = inbox.stats();
        assert_eq!(stats.requests, 200);
        assert_eq!(stats.responses_delivered, 200);
        assert_eq!(stats.responses_dropped, 0);
    }

    #[test]
    fn test_bounded_request_without_service() {
        quiet_logging();
        let inbox = Queue::named("unattended");

        let result = inbox.request_timeout(
            Msg::with_payload(MSG_PING, 1u64),
            Duration::from_millis(40),
        );
        assert!(matches!(result, Err(QueueError::RequestTimedOut { .. })));
        assert_eq!(inbox.pending_requests(), 0);

        // A service that starts late answers into the void
        let mut stale = inbox.try_get().unwrap();
        assert_eq!(stale.take_payload::<u64>(), Some(1));
        inbox.respond_to(stale.unique_id(), Msg::new(MSG_PONG));
        assert_eq!(inbox.stats().responses_dropped, 1);
        assert!(inbox.is_empty());
    }

    #[test]
    fn test_bounded_request_with_service() {
        quiet_logging();
        let inbox = Arc::new(Queue::new());
        let service = spawn_ping_service(inbox.clone());

        let mut reply = inbox
            .request_timeout(Msg::with_payload(MSG_PING, 41u64), Duration::from_secs(5))
            .unwrap();
        assert_eq!(reply.take_payload::<u64>(), Some(42));

        stop_service(&inbox);
        assert_eq!(service.join().unwrap(), 1);
    }

    #[test]
    fn test_service_ignores_plain_messages() {
        let inbox = Arc::new(Queue::new());
        let service = spawn_ping_service(inbox.clone());

        inbox.put(Msg::new(500));
        let reply = inbox.request(Msg::new(MSG_PING));
        assert_eq!(reply.msg_id(), MSG_PONG);

        stop_service(&inbox);
        assert_eq!(service.join().unwrap(), 1);
    }
}
