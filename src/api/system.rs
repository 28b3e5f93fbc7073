//! System API endpoints.

use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiResponse, AppState, SystemStatus};

/// Returns version, uptime and per-category record counts.
///
/// # Endpoint
/// `GET /api/system/status`
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<ApiResponse<SystemStatus>> {
    let service = state.search_service();

    let status = SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.start_time.elapsed().as_secs(),
        started_at: state.started_at.to_rfc3339(),
        provider: state.shared.provider.clone(),
        categories: service.category_counts().await,
        history_size: service.history().await.len(),
    };

    Json(ApiResponse::success(status))
}
