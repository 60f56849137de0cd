//! # msgq Telemetry
//!
//! Structured logging for processes built on `msgq-core`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use msgq_telemetry::{init_logging, LogConfig};
//!
//! fn main() {
//!     let config = LogConfig::from_env();
//!     init_logging(&config).expect("Failed to init logging");
//!
//!     // Queue events are now emitted under the `msgq_core` target
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MSGQ_SERVICE_NAME` | `msgq` | Service name in the startup event |
//! | `MSGQ_LOG_LEVEL` | `info` | Filter directive (falls back to `RUST_LOG`) |
//! | `MSGQ_JSON_LOGS` | `false` | JSON output |
//! | `MSGQ_THREAD_IDS` | `false` | Include thread ids |

mod config;
mod logging;

pub use config::LogConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize log subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
