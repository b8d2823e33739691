use serde::Serialize;

use geoquest_core::models::{Progress, Quest, QuestStatus};
use geoquest_core::tracker::{Grade, OpenQuestion};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "geoquest-api" }
    }
}

/// Quest list entry for the map layer. The correct answer is never exposed.
#[derive(Debug, Serialize)]
pub struct QuestView {
    pub id: u32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub question: String,
    pub options: Vec<String>,
    pub completed: bool,
    pub status: QuestStatus,
}

impl QuestView {
    pub fn new(quest: &Quest, status: QuestStatus) -> Self {
        Self {
            id: quest.id.0,
            name: quest.name.clone(),
            latitude: quest.latitude,
            longitude: quest.longitude,
            question: quest.question.clone(),
            options: quest.options.clone(),
            completed: quest.completed,
            status,
        }
    }
}

/// A successfully opened question
#[derive(Debug, Serialize)]
pub struct AttemptResponse {
    pub id: u32,
    pub name: String,
    pub question: String,
    pub options: Vec<String>,
}

impl From<OpenQuestion> for AttemptResponse {
    fn from(question: OpenQuestion) -> Self {
        Self {
            id: question.id.0,
            name: question.name,
            question: question.question,
            options: question.options,
        }
    }
}

/// Grading outcome plus the progress snapshot after it
#[derive(Debug, Serialize)]
pub struct GradeResponse {
    pub result: Grade,
    pub score: u32,
    pub completed: usize,
    pub total: usize,
}

impl GradeResponse {
    pub fn new(result: Grade, progress: Progress) -> Self {
        Self {
            result,
            score: progress.score,
            completed: progress.completed,
            total: progress.total,
        }
    }
}

/// Session progress response
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub score: u32,
    pub completed: usize,
    pub total: usize,
}

impl From<Progress> for ProgressResponse {
    fn from(progress: Progress) -> Self {
        Self {
            score: progress.score,
            completed: progress.completed,
            total: progress.total,
        }
    }
}
