//! # Census Telemetry
//!
//! Structured logging for stream-census.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use census_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config)?;
//! tracing::info!(stream_count = 42, "Census complete");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CENSUS_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `CENSUS_JSON_LOGS` | `false` | Emit one JSON object per event |
//! | `NO_COLOR` | unset | Disable ANSI colors |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
