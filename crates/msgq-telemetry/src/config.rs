//! Logging configuration from environment variables.

use crate::TelemetryError;
use serde::{Deserialize, Serialize};
use std::env;
use tracing_subscriber::EnvFilter;

/// Configuration for the log subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Service name attached to the startup event
    pub service_name: String,

    /// Filter directive (trace, debug, info, warn, error, or `target=level` lists)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,

    /// Whether to include thread ids (useful when debugging queue waits)
    pub thread_ids: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            service_name: "msgq".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            thread_ids: false,
        }
    }
}

impl LogConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MSGQ_SERVICE_NAME`: Service name (default: msgq)
    /// - `MSGQ_LOG_LEVEL` or `RUST_LOG`: Filter directive (default: info)
    /// - `MSGQ_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `MSGQ_THREAD_IDS`: Include thread ids (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            service_name: lookup("MSGQ_SERVICE_NAME").unwrap_or(defaults.service_name),

            log_level: lookup("MSGQ_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            json_logs: lookup("MSGQ_JSON_LOGS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.json_logs),

            thread_ids: lookup("MSGQ_THREAD_IDS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.thread_ids),
        }
    }

    /// Check the configuration before installing a subscriber.
    ///
    /// # Errors
    ///
    /// - `TelemetryError::Config` - Empty service name or unparseable filter
    pub fn validate(&self) -> Result<(), TelemetryError> {
        if self.service_name.trim().is_empty() {
            return Err(TelemetryError::Config(
                "service name must not be empty".to_string(),
            ));
        }
        self.env_filter().map(|_| ())
    }

    pub(crate) fn env_filter(&self) -> Result<EnvFilter, TelemetryError> {
        EnvFilter::try_new(&self.log_level).map_err(|e| {
            TelemetryError::Config(format!("invalid log level '{}': {}", self.log_level, e))
        })
    }
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}
