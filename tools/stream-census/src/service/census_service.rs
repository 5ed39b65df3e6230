//! Census Service
//!
//! The linear pipeline: resolve category, fetch streams, order viewer counts,
//! compute the Gini coefficient.

use std::sync::Arc;

use tracing::{debug, info, instrument};
use viewer_gini::{ascending_from_descending, gini, GiniCoefficient};

use crate::api::Category;
use crate::config::TARGET_CATEGORY;
use crate::error::CensusError;
use crate::ports::StreamDirectory;

/// Outcome of one census run
#[derive(Debug, Clone, PartialEq)]
pub struct CensusSummary {
    pub category_id: String,
    pub stream_count: usize,
    pub total_viewers: u64,
    pub gini: GiniCoefficient,
}

/// Pick the category whose name matches exactly (case sensitive).
pub fn find_category<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.name == name)
}

/// Census pipeline over a [`StreamDirectory`].
pub struct CensusService<D: StreamDirectory> {
    directory: Arc<D>,
    category_name: String,
}

impl<D: StreamDirectory> CensusService<D> {
    /// Create a service targeting [`TARGET_CATEGORY`].
    pub fn new(directory: Arc<D>) -> Self {
        Self::for_category(directory, TARGET_CATEGORY)
    }

    /// Create a service targeting another category name.
    pub fn for_category(directory: Arc<D>, category_name: impl Into<String>) -> Self {
        Self {
            directory,
            category_name: category_name.into(),
        }
    }

    /// Resolve a category identifier by exact name.
    pub async fn resolve_category(&self, name: &str) -> Result<String, CensusError> {
        let categories = self.directory.search_categories(name).await?;
        debug!(candidates = categories.len(), "Category search returned");

        find_category(&categories, name)
            .map(|c| c.id.clone())
            .ok_or_else(|| CensusError::CategoryNotFound {
                name: name.to_string(),
            })
    }

    /// Run the full pipeline once.
    #[instrument(skip(self), fields(category = %self.category_name))]
    pub async fn run(&self) -> Result<CensusSummary, CensusError> {
        let category_id = self.resolve_category(&self.category_name).await?;
        info!(category_id = %category_id, "Resolved category");

        let page = self.directory.live_streams(&category_id).await?;

        let fetched: Vec<u64> = page.streams.iter().map(|s| s.viewer_count).collect();
        let total_viewers = fetched.iter().fold(0u64, |acc, &v| acc.saturating_add(v));
        let ordered = ascending_from_descending(&fetched);
        let gini = gini(&ordered)?;

        let summary = CensusSummary {
            category_id,
            stream_count: fetched.len(),
            total_viewers,
            gini,
        };

        info!(
            stream_count = summary.stream_count,
            total_viewers = summary.total_viewers,
            gini = %summary.gini,
            "Census computed"
        );

        Ok(summary)
    }
}
