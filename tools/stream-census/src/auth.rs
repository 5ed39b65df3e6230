//! OAuth2 client-credentials flow and the resulting API session.

use reqwest::{Client, RequestBuilder};
use tracing::{debug, info};

use crate::api::{decode_body, error_message, TokenResponse};
use crate::config::CensusConfig;
use crate::error::CensusError;

/// Credentials attached to every Helix request.
///
/// Obtained once per run and owned by the API client for its lifetime.
#[derive(Clone)]
pub struct HelixSession {
    client_id: String,
    access_token: String,
    expires_in: u64,
}

impl HelixSession {
    pub fn new(client_id: impl Into<String>, access_token: impl Into<String>, expires_in: u64) -> Self {
        Self {
            client_id: client_id.into(),
            access_token: access_token.into(),
            expires_in,
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Token lifetime in seconds, as reported by the token endpoint
    pub fn expires_in(&self) -> u64 {
        self.expires_in
    }

    /// Add `Authorization: Bearer` and `Client-Id` headers.
    pub fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.access_token)
            .header("Client-Id", &self.client_id)
    }
}

impl std::fmt::Debug for HelixSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HelixSession")
            .field("client_id", &self.client_id)
            .field("access_token", &"***")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Request an app access token with the client-credentials grant.
///
/// Any failure, transport, status or body, is reported as [`CensusError::Auth`].
pub async fn request_app_token(http: &Client, config: &CensusConfig) -> Result<HelixSession, CensusError> {
    debug!(url = %config.token_url, "Requesting app access token");

    let form = [
        ("client_id", config.client_id.as_str()),
        ("client_secret", config.client_secret.expose()),
        ("grant_type", "client_credentials"),
    ];

    let response = http
        .post(&config.token_url)
        .form(&form)
        .send()
        .await
        .map_err(|e| CensusError::Auth(format!("token request to {} failed: {}", config.token_url, e)))?;

    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| CensusError::Auth(format!("reading token response failed: {}", e)))?;

    if !status.is_success() {
        return Err(CensusError::Auth(format!(
            "token endpoint returned HTTP {}: {}",
            status.as_u16(),
            error_message(&body)
        )));
    }

    let token = decode_body::<TokenResponse>("token response", &body)
        .map_err(|e| CensusError::Auth(e.to_string()))?;

    if token.access_token.is_empty() {
        return Err(CensusError::Auth("token endpoint returned an empty access token".to_string()));
    }

    info!(
        token_type = %token.token_type,
        expires_in = token.expires_in,
        "Obtained app access token"
    );

    Ok(HelixSession::new(
        config.client_id.clone(),
        token.access_token,
        token.expires_in,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_sets_headers() {
        let session = HelixSession::new("my-client", "tok123", 3600);
        let request = session
            .authorize(Client::new().get("http://127.0.0.1/helix/streams"))
            .build()
            .expect("request builds");

        let headers = request.headers();
        assert_eq!(headers["authorization"], "Bearer tok123");
        assert_eq!(headers["client-id"], "my-client");
    }

    #[test]
    fn test_debug_hides_token() {
        let session = HelixSession::new("my-client", "tok123", 3600);
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("tok123"));
        assert!(rendered.contains("my-client"));
    }
}
