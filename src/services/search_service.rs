//! Domain service for global and per-category record search.
//!
//! Wraps the synchronous search index for concurrent callers and owns the
//! provider used to refresh category snapshots.

use serde::Serialize;
use thiserror::Error;

use crate::models::{FieldValue, Record, SearchResult};
use crate::provider::ProviderError;
use crate::search::{Filters, SearchError};

/// Errors specific to search operations.
#[derive(Debug, Error)]
pub enum SearchServiceError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Record count of one category, for status reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub records: usize,
}

/// Outcome of reloading snapshots from the provider.
#[derive(Debug, Clone, Serialize)]
pub struct ReloadSummary {
    pub provider: String,
    pub categories: Vec<CategoryCount>,
    pub duration_ms: u64,
}

/// Domain service trait for search.
#[async_trait::async_trait]
pub trait SearchService: Send + Sync {
    /// Searches all categories and records the query in history.
    async fn search_global(&self, query: &str) -> Vec<SearchResult>;

    /// Searches one category with optional exact-match filters.
    async fn search_category(
        &self,
        category: &str,
        query: &str,
        filters: &Filters,
    ) -> Result<Vec<Record>, SearchServiceError>;

    /// Filterable field names of a category.
    async fn filter_fields(&self, category: &str) -> Result<Vec<String>, SearchServiceError>;

    /// Distinct values present for a field.
    async fn filter_values(
        &self,
        category: &str,
        field: &str,
    ) -> Result<Vec<FieldValue>, SearchServiceError>;

    async fn history(&self) -> Vec<String>;

    async fn clear_history(&self);

    /// Registered category names in scan order, with record counts.
    async fn category_counts(&self) -> Vec<CategoryCount>;

    /// Replaces every category snapshot with fresh data from the provider.
    async fn reload(&self) -> Result<ReloadSummary, SearchServiceError>;
}
