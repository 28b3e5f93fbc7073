use serde::Serialize;

use super::record::Record;

/// Display-ready descriptor produced by global search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Category kind, e.g. `patient`.
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub subtitle: String,
    pub link: String,
    #[serde(rename = "data")]
    pub record: Record,
}
