use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use geoquest_core::models::{QuestId, QuestStatus};

use crate::dto::{AttemptResponse, QuestView};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_quests(State(state): State<Arc<AppState>>) -> Json<Vec<QuestView>> {
    let tracker = state.tracker.read().unwrap();

    let views = tracker
        .quests()
        .iter()
        .map(|quest| {
            let status = tracker.quest_status(quest.id).unwrap_or(QuestStatus::Locked);
            QuestView::new(quest, status)
        })
        .collect();

    Json(views)
}

pub async fn attempt_quest(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<AttemptResponse>, ApiError> {
    tracing::info!(quest = id, "attempt request");

    let mut tracker = state.tracker.write().unwrap();
    let question = tracker.attempt_quest(QuestId(id))?;

    Ok(Json(AttemptResponse::from(question)))
}
