//! Logging configuration parsing from environment variables.

use anyhow::{Result, bail};
use std::env;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Observability environment configuration
#[derive(Debug, Clone)]
pub struct ObservabilityEnvConfig {
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
    /// Default level when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for ObservabilityEnvConfig {
    fn default() -> Self {
        Self {
            log_json: false,
            log_level: "info".to_string(),
        }
    }
}

impl ObservabilityEnvConfig {
    pub fn from_env() -> Result<Self> {
        let log_json = env::var("PNL_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        let log_level = env::var("PNL_LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .to_lowercase();
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            bail!(
                "Invalid PNL_LOG_LEVEL: {}. Must be one of {}",
                log_level,
                LOG_LEVELS.join(", ")
            );
        }

        Ok(Self {
            log_json,
            log_level,
        })
    }
}
