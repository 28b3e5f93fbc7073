//! In-memory implementation of the `SearchService` trait.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::config::SearchConfig;
use crate::models::{FieldValue, Record, SearchResult};
use crate::provider::{JsonFileProvider, RecordProvider, SeedProvider, hospital_categories};
use crate::search::{Filters, SearchIndex};
use crate::services::search_service::{
    CategoryCount, ReloadSummary, SearchService, SearchServiceError,
};

pub struct InMemorySearchService {
    index: Arc<RwLock<SearchIndex>>,
    provider: Arc<dyn RecordProvider>,
}

impl InMemorySearchService {
    #[must_use]
    pub fn new(index: SearchIndex, provider: Arc<dyn RecordProvider>) -> Self {
        Self {
            index: Arc::new(RwLock::new(index)),
            provider,
        }
    }

    /// Builds the hospital categories, picks a provider and loads the first
    /// snapshot.
    pub async fn from_config(config: &SearchConfig) -> Result<Self, SearchServiceError> {
        let index =
            SearchIndex::new(hospital_categories())?.with_history_limit(config.history_limit);

        let provider: Arc<dyn RecordProvider> = match &config.dataset_path {
            Some(path) => Arc::new(JsonFileProvider::new(path)),
            None => Arc::new(SeedProvider),
        };

        let service = Self::new(index, provider);
        service.reload().await?;
        Ok(service)
    }

    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }
}

#[async_trait]
impl SearchService for InMemorySearchService {
    async fn search_global(&self, query: &str) -> Vec<SearchResult> {
        // History is mutated, so global search serialises on the write lock
        let results = self.index.write().await.search_global(query);

        metrics::counter!("search_queries_total", "scope" => "global").increment(1);
        results
    }

    async fn search_category(
        &self,
        category: &str,
        query: &str,
        filters: &Filters,
    ) -> Result<Vec<Record>, SearchServiceError> {
        let results = self
            .index
            .read()
            .await
            .search_category(category, query, filters)?;

        metrics::counter!("search_queries_total", "scope" => "category").increment(1);
        Ok(results)
    }

    async fn filter_fields(&self, category: &str) -> Result<Vec<String>, SearchServiceError> {
        Ok(self.index.read().await.filter_fields(category)?.to_vec())
    }

    async fn filter_values(
        &self,
        category: &str,
        field: &str,
    ) -> Result<Vec<FieldValue>, SearchServiceError> {
        Ok(self.index.read().await.filter_values(category, field)?)
    }

    async fn history(&self) -> Vec<String> {
        self.index.read().await.history()
    }

    async fn clear_history(&self) {
        self.index.write().await.clear_history();
        info!(event = "search_history_cleared", "Search history cleared");
    }

    async fn category_counts(&self) -> Vec<CategoryCount> {
        let index = self.index.read().await;
        index
            .categories()
            .map(|category| CategoryCount {
                category: category.to_string(),
                records: index.record_count(category).unwrap_or(0),
            })
            .collect()
    }

    async fn reload(&self) -> Result<ReloadSummary, SearchServiceError> {
        let start = Instant::now();
        let categories: Vec<String> = self
            .index
            .read()
            .await
            .categories()
            .map(ToString::to_string)
            .collect();

        // Fetch outside the lock; searches keep running against the old data
        let snapshots = match self.provider.snapshot_all(&categories).await {
            Ok(snapshots) => snapshots,
            Err(e) => {
                warn!(event = "reload_failed", provider = self.provider.name(), error = %e, "Provider snapshot failed");
                return Err(e.into());
            }
        };

        let counts = {
            let mut index = self.index.write().await;

            // Stage on a copy so a bad snapshot leaves the live index untouched
            let mut staged = index.clone();
            let mut counts = Vec::with_capacity(snapshots.len());
            for (category, records) in snapshots {
                counts.push(CategoryCount {
                    category: category.clone(),
                    records: records.len(),
                });
                staged.replace_records(&category, records)?;
            }

            *index = staged;
            counts
        };

        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        info!(
            event = "search_index_reloaded",
            provider = self.provider.name(),
            categories = counts.len(),
            duration_ms = duration_ms,
            "Search index reloaded"
        );

        Ok(ReloadSummary {
            provider: self.provider.name().to_string(),
            categories: counts,
            duration_ms,
        })
    }
}
