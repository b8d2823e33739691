use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::dto::PositionRequest;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn update_position(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PositionRequest>,
) -> Result<StatusCode, ApiError> {
    let mut tracker = state.tracker.write().unwrap();
    tracker.record_position(request.latitude, request.longitude, request.accuracy_m)?;

    Ok(StatusCode::NO_CONTENT)
}
