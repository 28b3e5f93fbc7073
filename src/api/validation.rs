use super::ApiError;

const MAX_QUERY_LEN: usize = 256;

/// Rejects oversized queries. Blank queries are valid and handled by search.
pub fn validate_search_query(query: &str) -> Result<&str, ApiError> {
    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ApiError::validation(format!(
            "Search query must be {} characters or less",
            MAX_QUERY_LEN
        )));
    }
    Ok(query)
}

pub fn validate_category_name(name: &str) -> Result<&str, ApiError> {
    if name.is_empty() {
        return Err(ApiError::validation("Category name cannot be empty"));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ApiError::validation(
            "Category name can only contain letters, numbers, hyphens, and underscores",
        ));
    }

    Ok(name)
}
