//! Quest types: fixed real-world checkpoints with multiple-choice questions.

use geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{QuestError, Result};

/// Unique identifier for a quest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestId(pub u32);

impl fmt::Display for QuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a quest. `Completed` is terminal; at most one quest is
/// `Open` at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestStatus {
    Locked,
    Open,
    Completed,
}

/// One fixed checkpoint with its question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    /// Unique, stable identifier
    pub id: QuestId,

    /// Display name
    pub name: String,

    /// Latitude in degrees (WGS 84)
    pub latitude: f64,

    /// Longitude in degrees (WGS 84)
    pub longitude: f64,

    /// Question text
    pub question: String,

    /// Ordered answer options, each a distinct labeled string
    pub options: Vec<String>,

    /// The correct option. Must be a member of `options`.
    pub answer: String,

    /// Completion flag. Transitions false -> true exactly once, on a correct
    /// answer, and never reverts.
    #[serde(default)]
    pub completed: bool,
}

impl Quest {
    /// The quest coordinate as a point (x = longitude, y = latitude)
    pub fn location(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// Check the per-quest integrity invariants enforced at catalog load time.
    pub fn validate(&self) -> Result<()> {
        if !self.latitude.is_finite()
            || !self.longitude.is_finite()
            || self.latitude.abs() > 90.0
            || self.longitude.abs() > 180.0
        {
            return Err(QuestError::CatalogInvalid {
                reason: format!(
                    "quest {}: coordinate ({}, {}) out of range",
                    self.id, self.latitude, self.longitude
                ),
            });
        }

        if self.options.is_empty() {
            return Err(QuestError::CatalogInvalid {
                reason: format!("quest {}: no answer options", self.id),
            });
        }

        if !self.options.contains(&self.answer) {
            return Err(QuestError::AnswerNotInOptions { id: self.id });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quest() -> Quest {
        Quest {
            id: QuestId(1),
            name: "Test".to_string(),
            latitude: -37.8,
            longitude: 144.9,
            question: "?".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            answer: "a".to_string(),
            completed: false,
        }
    }

    #[test]
    fn valid_quest_passes() {
        assert!(quest().validate().is_ok());
    }

    #[test]
    fn answer_must_be_listed() {
        let mut q = quest();
        q.answer = "c".to_string();
        assert!(matches!(
            q.validate(),
            Err(QuestError::AnswerNotInOptions { id: QuestId(1) })
        ));
    }

    #[test]
    fn coordinate_must_be_in_range() {
        let mut q = quest();
        q.latitude = 91.0;
        assert!(matches!(q.validate(), Err(QuestError::CatalogInvalid { .. })));

        let mut q = quest();
        q.longitude = f64::NAN;
        assert!(matches!(q.validate(), Err(QuestError::CatalogInvalid { .. })));
    }

    #[test]
    fn options_must_not_be_empty() {
        let mut q = quest();
        q.options.clear();
        assert!(matches!(q.validate(), Err(QuestError::CatalogInvalid { .. })));
    }

    #[test]
    fn location_is_lng_lat_order() {
        let q = quest();
        assert_eq!(q.location().x(), 144.9);
        assert_eq!(q.location().y(), -37.8);
    }
}
