//! Error types for GeoQuest

use crate::models::QuestId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuestError {
    // Quiz flow errors
    #[error("No position known yet. Wait for a location fix before attempting a quest")]
    LocationUnavailable,

    #[error("Too far from the quest location: {distance_m} m away")]
    TooFar { distance_m: u32 },

    #[error("Quest {id} is already completed")]
    AlreadyCompleted { id: QuestId },

    #[error("No question is currently open")]
    NoActiveQuestion,

    #[error("No answer selected. Pick an option before submitting")]
    NoSelection,

    #[error("Unknown quest: {id}")]
    UnknownQuest { id: QuestId },

    // Position boundary errors
    #[error("Invalid position: latitude {latitude}, longitude {longitude}")]
    InvalidPosition { latitude: f64, longitude: f64 },

    // Catalog errors
    #[error("Quest catalog invalid: {reason}")]
    CatalogInvalid { reason: String },

    #[error("Quest {id}: correct answer is not one of the listed options")]
    AnswerNotInOptions { id: QuestId },

    #[error("Duplicate quest id {id} in catalog")]
    DuplicateQuestId { id: QuestId },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QuestError>;
