//! Search API endpoints.
//!
//! Global search returns display descriptors and feeds the query history;
//! category search returns raw records and accepts every query parameter
//! other than `query` as an exact-match filter.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use super::validation::{validate_category_name, validate_search_query};
use super::{ApiError, ApiResponse, AppState};
use crate::models::{FieldValue, Record, SearchResult};
use crate::search::Filters;
use crate::services::ReloadSummary;

const QUERY_PARAM: &str = "query";

#[derive(Debug, Deserialize)]
pub struct GlobalSearchRequest {
    #[serde(default)]
    pub query: String,
}

/// `GET /api/search?query=...`
pub async fn search_global(
    State(state): State<Arc<AppState>>,
    Query(request): Query<GlobalSearchRequest>,
) -> Result<Json<ApiResponse<Vec<SearchResult>>>, ApiError> {
    let query = validate_search_query(&request.query)?;
    let results = state.search_service().search_global(query).await;
    Ok(Json(ApiResponse::success(results)))
}

/// `GET /api/search/{category}?query=...&field=value...`
///
/// `query` is reserved for the search text, so a field named `query` cannot
/// be filtered over HTTP; use the library or the `category --filter` CLI.
pub async fn search_category(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
    Query(mut params): Query<HashMap<String, String>>,
) -> Result<Json<ApiResponse<Vec<Record>>>, ApiError> {
    let category = validate_category_name(&category)?;
    let query = params.remove(QUERY_PARAM).unwrap_or_default();
    let query = validate_search_query(&query)?;
    let filters: Filters = params.into_iter().collect();

    let records = state
        .search_service()
        .search_category(category, query, &filters)
        .await?;

    Ok(Json(ApiResponse::success(records)))
}

/// `GET /api/search/{category}/filters`
pub async fn get_filter_fields(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<Json<ApiResponse<Vec<String>>>, ApiError> {
    let category = validate_category_name(&category)?;
    let fields = state.search_service().filter_fields(category).await?;
    Ok(Json(ApiResponse::success(fields)))
}

/// `GET /api/search/{category}/filters/{field}`
pub async fn get_filter_values(
    State(state): State<Arc<AppState>>,
    Path((category, field)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Vec<FieldValue>>>, ApiError> {
    let category = validate_category_name(&category)?;
    let values = state
        .search_service()
        .filter_values(category, &field)
        .await?;
    Ok(Json(ApiResponse::success(values)))
}

/// `GET /api/search/history`
pub async fn get_history(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Vec<String>>> {
    Json(ApiResponse::success(state.search_service().history().await))
}

/// `DELETE /api/search/history`
pub async fn clear_history(State(state): State<Arc<AppState>>) -> Json<ApiResponse<()>> {
    state.search_service().clear_history().await;
    Json(ApiResponse::success(()))
}

/// `POST /api/search/reload`
pub async fn reload(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<ReloadSummary>>, ApiError> {
    let summary = state.search_service().reload().await?;
    info!(
        event = "reload_requested",
        provider = %summary.provider,
        "Search index reloaded via API"
    );
    Ok(Json(ApiResponse::success(summary)))
}
