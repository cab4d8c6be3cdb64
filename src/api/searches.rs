use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, SearchDto, SearchesView, category_groups};
use crate::catalog;
use crate::db::SearchInput;

#[derive(Debug, Deserialize)]
pub struct SearchPayload {
    pub name: String,
    #[serde(default)]
    pub zipcodes: String,
    pub price_min: Option<i32>,
    pub price_max: Option<i32>,
    #[serde(default)]
    pub keywords: String,
    pub category: Option<i32>,
    #[serde(default)]
    pub is_donation: bool,
    pub excluded_categories: Option<String>,
}

fn validate(payload: SearchPayload) -> Result<SearchInput, ApiError> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(ApiError::validation("Search name cannot be empty"));
    }

    if payload.price_min.is_some_and(|min| min < 0)
        || payload.price_max.is_some_and(|max| max < 0)
    {
        return Err(ApiError::validation("Price bounds must be non-negative"));
    }

    if let (Some(min), Some(max)) = (payload.price_min, payload.price_max) {
        if min > max {
            return Err(ApiError::validation(format!(
                "Invalid price range: {min} > {max}"
            )));
        }
    }

    Ok(SearchInput {
        name,
        zipcodes: payload.zipcodes.trim().to_string(),
        price_min: payload.price_min,
        price_max: payload.price_max,
        keywords: payload.keywords.trim().to_string(),
        category: payload.category.unwrap_or(catalog::DEFAULT_CATEGORY),
        is_donation: payload.is_donation,
        excluded_categories: payload
            .excluded_categories
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty()),
    })
}

/// GET /searches
/// All saved searches with their marketplace links, plus the grouped
/// catalog the edit form needs.
pub async fn list_searches(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SearchesView>>, ApiError> {
    let searches = state.store.list_searches().await?;
    let scanner_status = super::system::scanner_status(&state.store).await?;

    Ok(Json(ApiResponse::success(SearchesView {
        searches: searches.into_iter().map(SearchDto::from).collect(),
        categories: category_groups(),
        scanner_status,
    })))
}

/// POST /searches
pub async fn create_search(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SearchPayload>,
) -> Result<Json<ApiResponse<SearchDto>>, ApiError> {
    let input = validate(payload)?;
    let created = state.store.create_search(input).await?;
    Ok(Json(ApiResponse::success(SearchDto::from(created))))
}

/// PUT /searches/{id}
/// Full-field replace.
pub async fn update_search(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<SearchPayload>,
) -> Result<Json<ApiResponse<SearchDto>>, ApiError> {
    let input = validate(payload)?;

    if !state.store.update_search(id, input).await? {
        return Err(ApiError::not_found("Search", id));
    }

    let updated = state
        .store
        .get_search(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Search", id))?;

    Ok(Json(ApiResponse::success(SearchDto::from(updated))))
}

/// DELETE /searches/{id}
/// Ads found by this search go with it.
pub async fn delete_search(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<bool>>, ApiError> {
    if state.store.delete_search(id).await? {
        Ok(Json(ApiResponse::success(true)))
    } else {
        Err(ApiError::not_found("Search", id))
    }
}

/// POST /searches/{id}/toggle
/// Pause/resume scanning for this search.
pub async fn toggle_search(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<SearchDto>>, ApiError> {
    if !state.store.toggle_search(id).await? {
        return Err(ApiError::not_found("Search", id));
    }

    let updated = state
        .store
        .get_search(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Search", id))?;

    Ok(Json(ApiResponse::success(SearchDto::from(updated))))
}
