//! Logging configuration module
//! Structured logging to stderr so command output on stdout stays clean

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,     // used when RUST_LOG is not set
    pub json_format: bool, // one JSON object per line
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json_format: false,
        }
    }
}

impl LoggingConfig {
    fn filter(&self) -> Result<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.level)
                .map_err(|e| anyhow!("invalid log level '{}': {}", self.level, e)),
        }
    }
}

/// Install the global subscriber
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = config.filter()?;

    if config.json_format {
        let json_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .with_writer(io::stderr);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()?;
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .with_writer(io::stderr);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .try_init()?;
    }

    Ok(())
}
