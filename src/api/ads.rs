use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, NewAdsCheck};
use crate::status::TIMESTAMP_FORMAT;

/// POST /ads/{id}/seen
/// One-way archive flag; calling it again is a no-op.
pub async fn mark_seen(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<bool>>, ApiError> {
    if state.store.mark_ad_seen(id).await? {
        Ok(Json(ApiResponse::success(true)))
    } else {
        Err(ApiError::not_found("Ad", id))
    }
}

/// POST /ads/{id}/favorite
/// Bidirectional favorite flip.
pub async fn toggle_favorite(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<bool>>, ApiError> {
    if state.store.toggle_ad_favorite(id).await? {
        Ok(Json(ApiResponse::success(true)))
    } else {
        Err(ApiError::not_found("Ad", id))
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckNewQuery {
    pub search_id: Option<i32>,
    /// Only count ads scraped strictly after this timestamp.
    pub last_check: Option<String>,
}

/// GET /ads/check
/// Lightweight polling endpoint: how many unseen ads arrived, scanner
/// liveness, and the server clock for the next poll.
pub async fn check_new(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CheckNewQuery>,
) -> Result<Json<ApiResponse<NewAdsCheck>>, ApiError> {
    let new_ads_count = state
        .store
        .count_new_ads(query.search_id, query.last_check.as_deref())
        .await?;
    let scanner_status = super::system::scanner_status(&state.store).await?;

    Ok(Json(ApiResponse::success(NewAdsCheck {
        new_ads_count,
        scanner_status,
        current_time: chrono::Local::now()
            .naive_local()
            .format(TIMESTAMP_FORMAT)
            .to_string(),
    })))
}
