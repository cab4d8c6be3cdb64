use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, LogDto, SystemStatusDto};
use crate::db::{LAST_LAUNCH, Store};
use crate::status::{self, ScannerStatus};

/// Evaluates scanner liveness against the current wall clock. Shared by
/// every view that shows the status badge.
pub(crate) async fn scanner_status(store: &Store) -> Result<ScannerStatus, ApiError> {
    let last_activity = store.scanner_activity().await?;
    let last_launch = store.get_stat(LAST_LAUNCH).await?;

    Ok(status::evaluate(
        last_activity,
        last_launch,
        chrono::Local::now().naive_local(),
    ))
}

/// GET /system/status
pub async fn get_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SystemStatusDto>>, ApiError> {
    let scanner = scanner_status(&state.store).await?;

    Ok(Json(ApiResponse::success(SystemStatusDto {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        timezone: state.config.general.timezone.clone(),
        scanner,
    })))
}

/// POST /system/scan
/// Flag a manual scan for the external scanner. Purely advisory; there is
/// no acknowledgment to wait for.
pub async fn run_scan(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<bool>>, ApiError> {
    state.store.request_scan().await?;
    Ok(Json(ApiResponse::success(true)))
}

#[derive(Debug, Deserialize)]
pub struct LogsQuery {
    pub limit: Option<u64>,
}

/// GET /system/logs
/// Latest scanner journal entries.
pub async fn get_logs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LogsQuery>,
) -> Result<Json<ApiResponse<Vec<LogDto>>>, ApiError> {
    let logs = state.store.recent_logs(query.limit.unwrap_or(20)).await?;
    Ok(Json(ApiResponse::success(
        logs.into_iter().map(LogDto::from).collect(),
    )))
}
