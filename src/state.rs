use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::services::{InMemorySearchService, SearchService};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub search_service: Arc<dyn SearchService>,

    /// Label of the record provider backing the search index.
    pub provider: String,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let service = InMemorySearchService::from_config(&config.search)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to build search index: {e}"))?;
        let provider = service.provider_name().to_string();

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            search_service: Arc::new(service),
            provider,
        })
    }
}
