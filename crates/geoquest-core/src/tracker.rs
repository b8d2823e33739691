//! The quest tracker: a proximity-gated quiz state machine.
//!
//! The tracker owns the quest set, the last known player position, the session
//! score, and the single open question. It is driven synchronously by external
//! events: position fixes from the location source and select/submit gestures
//! from the player. Every operation completes immediately and leaves the
//! tracker in a consistent state, including on error.

use serde::Serialize;

use crate::config::LayeredConfig;
use crate::error::{QuestError, Result};
use crate::geo::haversine_distance;
use crate::models::{Position, Progress, Quest, QuestId, QuestStatus};

/// Result of grading a submitted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Correct,
    Incorrect,
}

/// Presentation view of the currently open question
#[derive(Debug, Clone, Serialize)]
pub struct OpenQuestion {
    pub id: QuestId,
    pub name: String,
    pub question: String,
    pub options: Vec<String>,
}

/// Tunable tracker settings, snapshotted from configuration at startup
#[derive(Debug, Clone, Copy)]
pub struct TrackerSettings {
    /// Radius in meters within which a quest's question may be opened
    pub proximity_threshold_m: f64,
    /// Points awarded per correct answer
    pub award_points: u32,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            proximity_threshold_m: 25.0,
            award_points: 10,
        }
    }
}

impl From<&LayeredConfig> for TrackerSettings {
    fn from(config: &LayeredConfig) -> Self {
        Self {
            proximity_threshold_m: config.proximity_threshold_m.value,
            award_points: config.award_points.value,
        }
    }
}

/// One quiz session: quest set, last known position, score, and the open
/// question. Lives for the duration of the process; nothing is persisted.
pub struct QuestTracker {
    quests: Vec<Quest>,
    position: Option<Position>,
    score: u32,
    open_quest: Option<QuestId>,
    selection: Option<String>,
    settings: TrackerSettings,
}

impl QuestTracker {
    /// Build a tracker over a validated quest catalog.
    pub fn new(quests: Vec<Quest>, settings: TrackerSettings) -> Result<Self> {
        crate::catalog::validate_catalog(&quests)?;

        Ok(Self {
            quests,
            position: None,
            score: 0,
            open_quest: None,
            selection: None,
            settings,
        })
    }

    /// Record a new position fix, replacing any previous one. Invalid input is
    /// rejected and leaves the stored position untouched. Never affects score
    /// or quest state; an open question stays open.
    pub fn record_position(&mut self, latitude: f64, longitude: f64, accuracy_m: f64) -> Result<()> {
        let position = Position::try_new(latitude, longitude, accuracy_m)?;
        tracing::debug!(latitude, longitude, accuracy_m, "position updated");
        self.position = Some(position);
        Ok(())
    }

    /// Try to open a quest's question. Proximity is checked here and only
    /// here; a successful open discards any previously open question along
    /// with its pending selection.
    pub fn attempt_quest(&mut self, id: QuestId) -> Result<OpenQuestion> {
        let quest = self
            .quests
            .iter()
            .find(|q| q.id == id)
            .ok_or(QuestError::UnknownQuest { id })?;

        let position = self.position.as_ref().ok_or(QuestError::LocationUnavailable)?;

        if quest.completed {
            return Err(QuestError::AlreadyCompleted { id });
        }

        let distance = haversine_distance(position.point(), quest.location());
        if distance > self.settings.proximity_threshold_m {
            return Err(QuestError::TooFar {
                distance_m: distance.round() as u32,
            });
        }

        let question = OpenQuestion {
            id,
            name: quest.name.clone(),
            question: quest.question.clone(),
            options: quest.options.clone(),
        };

        self.open_quest = Some(id);
        self.selection = None;
        tracing::info!(quest = %id, distance_m = distance.round() as u32, "quest opened");

        Ok(question)
    }

    /// Highlight an answer option for the open question, replacing any prior
    /// selection. Reselecting the same option is idempotent.
    pub fn select_option(&mut self, option: impl Into<String>) -> Result<()> {
        if self.open_quest.is_none() {
            return Err(QuestError::NoActiveQuestion);
        }
        self.selection = Some(option.into());
        Ok(())
    }

    /// Grade the pending selection against the open quest's correct answer.
    ///
    /// A correct answer completes the quest, adds the configured award to the
    /// score, and closes the question; both updates land together. An
    /// incorrect answer leaves the question open and the selection in place,
    /// so the player can retry without a new proximity check.
    pub fn submit_answer(&mut self) -> Result<Grade> {
        let id = self.open_quest.ok_or(QuestError::NoActiveQuestion)?;
        let selection = self.selection.clone().ok_or(QuestError::NoSelection)?;

        let quest = self
            .quests
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(QuestError::UnknownQuest { id })?;

        if selection == quest.answer {
            quest.completed = true;
            self.score += self.settings.award_points;
            self.open_quest = None;
            self.selection = None;
            tracing::info!(quest = %id, score = self.score, "quest completed");
            Ok(Grade::Correct)
        } else {
            tracing::debug!(quest = %id, "incorrect answer");
            Ok(Grade::Incorrect)
        }
    }

    /// Aggregate session progress. Pure query; the completed count is derived
    /// from the quest set.
    pub fn progress(&self) -> Progress {
        let completed = self.quests.iter().filter(|q| q.completed).count();
        Progress {
            score: self.score,
            completed,
            total: self.quests.len(),
        }
    }

    /// Read access to the quest set, for rendering.
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    /// Lifecycle state of a quest, or None for an unknown id.
    pub fn quest_status(&self, id: QuestId) -> Option<QuestStatus> {
        let quest = self.quests.iter().find(|q| q.id == id)?;
        Some(if quest.completed {
            QuestStatus::Completed
        } else if self.open_quest == Some(id) {
            QuestStatus::Open
        } else {
            QuestStatus::Locked
        })
    }

    /// The currently open quest, if any.
    pub fn open_quest(&self) -> Option<QuestId> {
        self.open_quest
    }

    /// The last recorded position fix, if any.
    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    /// The settings this tracker was built with.
    pub fn settings(&self) -> TrackerSettings {
        self.settings
    }
}
