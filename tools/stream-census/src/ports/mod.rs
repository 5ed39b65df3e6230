//! Outbound Ports (Driven Ports)
//!
//! What the census pipeline needs from the streaming platform.

use async_trait::async_trait;

use crate::api::{Category, StreamPage};
use crate::error::CensusError;

/// Category and live-stream lookup (Driven Port)
///
/// Implemented by [`crate::api::HelixClient`] in production and by in-memory
/// fakes in tests.
#[async_trait]
pub trait StreamDirectory: Send + Sync {
    /// Search categories by free-text query
    async fn search_categories(&self, query: &str) -> Result<Vec<Category>, CensusError>;

    /// First page of live streams in a category, most viewers first
    async fn live_streams(&self, category_id: &str) -> Result<StreamPage, CensusError>;
}
