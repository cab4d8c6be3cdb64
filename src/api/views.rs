use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{AdDto, AdsView, ApiError, ApiResponse, AppState, LogDto, SearchDto, category_groups};

/// Page size when the client does not ask for one.
const DEFAULT_AD_LIMIT: u64 = 100;

/// Scanner journal entries shown under the ad list.
const LOG_LIMIT: u64 = 20;

#[derive(Debug, Deserialize)]
pub struct AdsViewQuery {
    pub search_id: Option<i32>,
    pub limit: Option<u64>,
}

/// GET /dashboard
/// Unseen ads plus everything the page frame needs.
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AdsViewQuery>,
) -> Result<Json<ApiResponse<AdsView>>, ApiError> {
    build_ads_view(&state, false, query).await
}

/// GET /archives
/// The seen side of the partition, same shape.
pub async fn archives(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AdsViewQuery>,
) -> Result<Json<ApiResponse<AdsView>>, ApiError> {
    build_ads_view(&state, true, query).await
}

async fn build_ads_view(
    state: &AppState,
    archived: bool,
    query: AdsViewQuery,
) -> Result<Json<ApiResponse<AdsView>>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_AD_LIMIT);

    let ads = if archived {
        state.store.list_archived_ads(limit, query.search_id).await?
    } else {
        state.store.list_new_ads(limit, query.search_id).await?
    };

    let searches = state.store.list_searches().await?;
    let logs = state.store.recent_logs(LOG_LIMIT).await?;
    let scanner_status = super::system::scanner_status(&state.store).await?;

    Ok(Json(ApiResponse::success(AdsView {
        ads: ads.into_iter().map(AdDto::from).collect(),
        searches: searches.into_iter().map(SearchDto::from).collect(),
        categories: category_groups(),
        scanner_status,
        logs: logs.into_iter().map(LogDto::from).collect(),
        current_search_id: query.search_id,
    })))
}
