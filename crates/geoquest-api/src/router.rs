use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Quest list for the map layer
        .route("/api/v1/quests", get(handlers::list_quests))

        // Quiz flow
        .route("/api/v1/position", post(handlers::update_position))
        .route("/api/v1/quests/{id}/attempt", post(handlers::attempt_quest))
        .route("/api/v1/answer/select", post(handlers::select_option))
        .route("/api/v1/answer/submit", post(handlers::submit_answer))

        // Progress
        .route("/api/v1/progress", get(handlers::get_progress))

        .with_state(state)
}
