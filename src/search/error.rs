use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown field '{field}' for category '{category}'")]
    UnknownField { category: String, field: String },

    #[error("Record in '{category}' carries undeclared field '{field}'")]
    UndeclaredField { category: String, field: String },

    #[error("Category '{0}' is registered twice")]
    DuplicateCategory(String),
}

impl SearchError {
    pub fn unknown_field(category: &str, field: &str) -> Self {
        Self::UnknownField {
            category: category.to_string(),
            field: field.to_string(),
        }
    }
}
