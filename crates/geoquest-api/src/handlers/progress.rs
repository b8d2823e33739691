use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::dto::ProgressResponse;
use crate::state::AppState;

pub async fn get_progress(State(state): State<Arc<AppState>>) -> Json<ProgressResponse> {
    let tracker = state.tracker.read().unwrap();
    Json(ProgressResponse::from(tracker.progress()))
}
