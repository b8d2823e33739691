use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::dto::{GradeResponse, SelectRequest};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn select_option(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectRequest>,
) -> Result<StatusCode, ApiError> {
    let mut tracker = state.tracker.write().unwrap();
    tracker.select_option(request.option)?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn submit_answer(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GradeResponse>, ApiError> {
    let mut tracker = state.tracker.write().unwrap();
    let grade = tracker.submit_answer()?;
    let progress = tracker.progress();

    Ok(Json(GradeResponse::new(grade, progress)))
}
