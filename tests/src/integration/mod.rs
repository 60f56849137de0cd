//! # Integration Scenarios
//!
//! Multi-thread flows exercising `msgq-core` together with `msgq-telemetry`.

pub mod request_response;
