use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{ProviderError, RecordProvider};
use crate::models::Record;

/// Dataset file layout: category name to ordered records.
///
/// ```json
/// { "patients": [{ "id": 1, "name": "John Doe", "status": "Admitted" }] }
/// ```
pub type Dataset = HashMap<String, Vec<Record>>;

/// Reads category snapshots from a JSON file on every request, so edits to the
/// file are picked up by the next reload.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_dataset(&self) -> Result<Dataset, ProviderError> {
        let path = self.path.clone();

        // Parsing may be large; keep it off the async workers
        let dataset = tokio::task::spawn_blocking(move || read_dataset_blocking(&path))
            .await
            .map_err(|e| ProviderError::Task(e.to_string()))??;

        info!(
            event = "dataset_loaded",
            path = %self.path.display(),
            categories = dataset.len(),
            "Loaded dataset file"
        );
        Ok(dataset)
    }
}

fn read_dataset_blocking(path: &Path) -> Result<Dataset, ProviderError> {
    let content = std::fs::read_to_string(path).map_err(|source| ProviderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ProviderError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[async_trait]
impl RecordProvider for JsonFileProvider {
    fn name(&self) -> &str {
        "file"
    }

    async fn snapshot(&self, category: &str) -> Result<Vec<Record>, ProviderError> {
        let mut dataset = self.read_dataset().await?;
        Ok(dataset.remove(category).unwrap_or_default())
    }

    async fn snapshot_all(
        &self,
        categories: &[String],
    ) -> Result<Vec<(String, Vec<Record>)>, ProviderError> {
        let mut dataset = self.read_dataset().await?;

        let snapshots = categories
            .iter()
            .map(|category| {
                let records = dataset.remove(category).unwrap_or_else(|| {
                    debug!(category = %category, "Dataset has no records for category");
                    Vec::new()
                });
                (category.clone(), records)
            })
            .collect();

        Ok(snapshots)
    }
}
