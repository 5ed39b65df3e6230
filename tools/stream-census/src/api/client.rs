//! Helix API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::types::*;
use crate::auth::{self, HelixSession};
use crate::config::CensusConfig;
use crate::error::CensusError;
use crate::ports::StreamDirectory;

/// Longest raw body excerpt carried in an error message
const MAX_ERROR_BODY: usize = 200;

/// `User-Agent` sent with every request
pub const USER_AGENT: &str = concat!("stream-census/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by the token request and Helix calls.
pub fn http_client(timeout: Duration, user_agent: &str) -> Result<Client, CensusError> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(user_agent)
        .build()
        .map_err(CensusError::ClientBuild)
}

/// Decode a JSON body, tagging failures with what was being decoded.
pub fn decode_body<T: DeserializeOwned>(what: &'static str, body: &[u8]) -> Result<T, CensusError> {
    serde_json::from_slice(body).map_err(|source| CensusError::Decode { what, source })
}

/// Human readable message for a non-2xx response body.
///
/// Uses the Helix error shape when it decodes, else a trimmed excerpt of the
/// raw body.
pub fn error_message(body: &[u8]) -> String {
    if let Ok(err) = serde_json::from_slice::<HelixErrorBody>(body) {
        let rendered = err.to_string();
        if !rendered.is_empty() {
            return rendered;
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return "<empty body>".to_string();
    }
    text.chars().take(MAX_ERROR_BODY).collect()
}

/// Authenticated Helix client.
pub struct HelixClient {
    http: Client,
    api_base: String,
    session: HelixSession,
}

impl HelixClient {
    /// Build the HTTP client, run the client-credentials flow and return a
    /// ready-to-use API client.
    pub async fn connect(config: &CensusConfig) -> Result<Self, CensusError> {
        let http = http_client(config.http_timeout, USER_AGENT)?;

        let session = auth::request_app_token(&http, config).await?;

        Ok(Self::with_session(http, config.api_base.clone(), session))
    }

    /// Create a client around an existing session.
    pub fn with_session(http: Client, api_base: impl Into<String>, session: HelixSession) -> Self {
        Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &HelixSession {
        &self.session
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }

    /// Authenticated GET returning a decoded JSON body.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        what: &'static str,
    ) -> Result<T, CensusError> {
        let url = self.endpoint(path);
        debug!(url = %url, ?query, "GET");

        let response = self
            .session
            .authorize(self.http.get(&url).query(query))
            .send()
            .await
            .map_err(|source| CensusError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|source| CensusError::Transport {
            url: url.clone(),
            source,
        })?;

        if !status.is_success() {
            return Err(CensusError::Http {
                url,
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        decode_body(what, &body)
    }
}

#[async_trait]
impl StreamDirectory for HelixClient {
    async fn search_categories(&self, query: &str) -> Result<Vec<Category>, CensusError> {
        let response: DataResponse<Category> = self
            .get("search/categories", &[("query", query)], "category search response")
            .await?;
        Ok(response.data)
    }

    async fn live_streams(&self, category_id: &str) -> Result<StreamPage, CensusError> {
        let response: DataResponse<LiveStream> = self
            .get(
                "streams",
                &[("game_id", category_id), ("type", "live")],
                "streams response",
            )
            .await?;

        let page = StreamPage::from(response);
        if page.cursor.is_some() {
            warn!(
                category_id,
                fetched = page.streams.len(),
                "More live streams available; only the first page is used"
            );
        }
        Ok(page)
    }
}
