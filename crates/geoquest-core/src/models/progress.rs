use serde::Serialize;

/// Aggregate session progress. The completed count is derived from the quest
/// set, never stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Total score, sum of per-quest awards
    pub score: u32,

    /// Number of completed quests
    pub completed: usize,

    /// Total number of quests in the catalog
    pub total: usize,
}
