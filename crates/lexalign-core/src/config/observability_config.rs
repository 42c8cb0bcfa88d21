use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub log_level: String,
    /// Emit structured JSON log lines instead of text.
    pub json_logs: bool,
    /// Log the end-of-run summary.
    pub run_summary: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            json_logs: defaults::DEFAULT_JSON_LOGS,
            run_summary: defaults::DEFAULT_RUN_SUMMARY,
        }
    }
}

impl ObservabilityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                reason: format!("'{}' is not one of {}", self.log_level, LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }
}
