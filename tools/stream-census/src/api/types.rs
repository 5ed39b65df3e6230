//! Helix API wire types

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Token endpoint response (client-credentials grant)
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub token_type: String,
}

/// Envelope shared by Helix list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct DataResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Cursor for the next page, when there is one
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Helix error body
#[derive(Debug, Clone, Deserialize)]
pub struct HelixErrorBody {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
}

impl std::fmt::Display for HelixErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.error.is_empty(), self.message.is_empty()) {
            (false, false) => write!(f, "{}: {}", self.error, self.message),
            (true, false) => f.write_str(&self.message),
            _ => f.write_str(&self.error),
        }
    }
}

/// Entry from `search/categories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub box_art_url: String,
}

/// Entry from `streams`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveStream {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_login: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub game_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub game_name: String,
    /// "live", or empty on error
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub stream_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub viewer_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub started_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnail_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_mature: bool,
}

/// First page of live streams for a category
#[derive(Debug, Clone, Default)]
pub struct StreamPage {
    /// Streams as ordered by the platform (most viewers first)
    pub streams: Vec<LiveStream>,
    /// Present when more pages exist
    pub cursor: Option<String>,
}

impl From<DataResponse<LiveStream>> for StreamPage {
    fn from(response: DataResponse<LiveStream>) -> Self {
        Self {
            streams: response.data,
            cursor: response
                .pagination
                .and_then(|p| p.cursor)
                .filter(|c| !c.is_empty()),
        }
    }
}
