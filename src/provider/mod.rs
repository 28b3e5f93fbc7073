//! Sources of category snapshots.
//!
//! The search index never fetches data itself; a provider is asked for each
//! category's records before the index is (re)loaded.

pub mod file;
pub mod seed;

pub use file::JsonFileProvider;
pub use seed::{SeedProvider, hospital_categories};

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::Record;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Provider task failed: {0}")]
    Task(String),
}

#[async_trait]
pub trait RecordProvider: Send + Sync {
    /// Short label used in logs and the status endpoint.
    fn name(&self) -> &str;

    /// Ordered snapshot of one category. Unknown categories yield no records.
    async fn snapshot(&self, category: &str) -> Result<Vec<Record>, ProviderError>;

    /// Snapshots of several categories, in the order requested.
    async fn snapshot_all(
        &self,
        categories: &[String],
    ) -> Result<Vec<(String, Vec<Record>)>, ProviderError> {
        let mut snapshots = Vec::with_capacity(categories.len());
        for category in categories {
            snapshots.push((category.clone(), self.snapshot(category).await?));
        }
        Ok(snapshots)
    }
}
