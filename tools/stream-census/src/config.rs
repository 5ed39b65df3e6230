//! Run configuration from environment variables.
//!
//! Built once in `main` and passed down explicitly.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// Category whose live streams are sampled. Also used as the search query.
pub const TARGET_CATEGORY: &str = "Software and Game Development";

/// Default OAuth2 token endpoint
pub const DEFAULT_TOKEN_URL: &str = "https://id.twitch.tv/oauth2/token";

/// Default Helix API base URL
pub const DEFAULT_API_BASE: &str = "https://api.twitch.tv/helix";

/// Default per-request deadline in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// OAuth2 client secret. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(***)")
    }
}

/// Configuration for a census run.
#[derive(Debug, Clone)]
pub struct CensusConfig {
    /// OAuth2 client identifier, also sent as the `Client-Id` header
    pub client_id: String,

    /// OAuth2 client secret
    pub client_secret: ClientSecret,

    /// Client-credentials token endpoint
    pub token_url: String,

    /// Helix API base URL, without trailing slash
    pub api_base: String,

    /// Deadline applied to every HTTP request
    pub http_timeout: Duration,
}

impl CensusConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CLIENT_ID`: required
    /// - `CLIENT_SECRET`: required
    /// - `CENSUS_TOKEN_URL`: token endpoint (default: id.twitch.tv)
    /// - `CENSUS_API_BASE`: Helix base URL (default: api.twitch.tv/helix)
    /// - `CENSUS_HTTP_TIMEOUT_SECS`: request deadline (default: 10)
    ///
    /// Empty values count as unset. URL overrides must be `http://` or `https://`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`CensusConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::MissingVar(name))
        };

        let client_id = required("CLIENT_ID")?;
        let client_secret = ClientSecret::new(required("CLIENT_SECRET")?);

        let url = |name: &'static str, default: &str| -> Result<String, ConfigError> {
            match lookup(name).filter(|v| !v.trim().is_empty()) {
                Some(raw) => {
                    let value = raw.trim().trim_end_matches('/');
                    if !(value.starts_with("http://") || value.starts_with("https://")) {
                        return Err(ConfigError::InvalidVar {
                            name,
                            reason: format!("{raw:?} is not an http(s) URL"),
                        });
                    }
                    Ok(value.to_string())
                }
                None => Ok(default.to_string()),
            }
        };

        let token_url = url("CENSUS_TOKEN_URL", DEFAULT_TOKEN_URL)?;
        let api_base = url("CENSUS_API_BASE", DEFAULT_API_BASE)?;

        let timeout_secs = match lookup("CENSUS_HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidVar {
                        name: "CENSUS_HTTP_TIMEOUT_SECS",
                        reason: "must be greater than 0".to_string(),
                    })
                }
                Ok(secs) => secs,
                Err(e) => {
                    return Err(ConfigError::InvalidVar {
                        name: "CENSUS_HTTP_TIMEOUT_SECS",
                        reason: format!("{raw:?}: {e}"),
                    })
                }
            },
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            client_id,
            client_secret,
            token_url,
            api_base,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
