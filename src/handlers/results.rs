use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::aggregate::Averages;
use crate::model::parse_timestamp;
use crate::AppState;

use super::AppError;

pub const NO_RESULTS: &str = "No benchmarking results found.";
pub const NO_RESULTS_IN_WINDOW: &str =
    "No benchmarking results found in the specified time window.";
pub const INVALID_DATETIME: &str = "Invalid datetime format. Use ISO 8601 format.";

// ─── GET /results/average ────────────────────────────────────────

pub async fn average(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Averages>, AppError> {
    // Empty store → None → 404
    Averages::compute(state.store.all())
        .map(Json)
        .ok_or_else(|| AppError::NotFound(NO_RESULTS.into()))
}

// ─── GET /results/average/:start_time/:end_time ──────────────────

pub async fn average_in_window(
    State(state): State<Arc<AppState>>,
    Path((start_time, end_time)): Path<(String, String)>,
) -> Result<Json<Averages>, AppError> {
    let bad_request = |_| AppError::BadRequest(INVALID_DATETIME.into());
    let start = parse_timestamp(&start_time).map_err(bad_request)?;
    let end = parse_timestamp(&end_time).map_err(bad_request)?;

    // Empty window → None → 404
    Averages::compute(state.store.in_window(start, end))
        .map(Json)
        .ok_or_else(|| AppError::NotFound(NO_RESULTS_IN_WINDOW.into()))
}
