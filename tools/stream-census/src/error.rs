//! Error taxonomy for a census run.
//!
//! Every variant is fatal to the run; none of them is retried.

use std::path::PathBuf;

use thiserror::Error;
use viewer_gini::GiniError;

/// Configuration errors. Raised before any network call.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },
}

/// Errors that can occur during a census run.
#[derive(Debug, Error)]
pub enum CensusError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("HTTP {status} from {url}: {message}")]
    Http {
        url: String,
        status: u16,
        message: String,
    },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Category not found: {name:?}")]
    CategoryNotFound { name: String },

    #[error("Viewer metric: {0}")]
    Metric(#[from] GiniError),

    #[error("Failed to append record to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_error_is_distinguishable() {
        let err: CensusError = GiniError::ZeroTotal { len: 3 }.into();
        assert!(matches!(err, CensusError::Metric(GiniError::ZeroTotal { len: 3 })));
        assert_eq!(
            err.to_string(),
            "Viewer metric: Cannot compute Gini coefficient: all 3 values are zero"
        );
    }

    #[test]
    fn test_config_error_message_names_variable() {
        let err: CensusError = ConfigError::MissingVar("CLIENT_ID").into();
        assert!(err.to_string().contains("CLIENT_ID"));
    }
}
