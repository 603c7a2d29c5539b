use chrono::{DateTime, Utc};

use crate::types::{Mark, Phase, SlotId, TileId};

/// Which list the keyboard cursor is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorColumn {
    #[default]
    Pool,
    Slots,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSnapshot {
    pub id: TileId,
    pub keyword: String,
    pub focused: bool,
    /// Currently being dragged.
    pub lifted: bool,
    pub mark: Option<Mark>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSnapshot {
    pub id: SlotId,
    pub number: usize,
    pub definition: String,
    pub occupant: Option<TileSnapshot>,
    pub hovered: bool,
    pub focused: bool,
    pub mark: Option<Mark>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub elapsed_ms: u64,
    pub completed_at: DateTime<Utc>,
}

/// Everything the view needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizSnapshot {
    pub phase: Phase,
    pub paused: bool,
    pub timer_text: String,
    pub slots: Vec<SlotSnapshot>,
    /// Unplaced tiles in dealt order.
    pub pool: Vec<TileSnapshot>,
    pub pool_hovered: bool,
    pub dragging: Option<TileSnapshot>,
    pub cursor_column: CursorColumn,
    pub feedback: Option<String>,
    pub leaderboard: Vec<LeaderboardRow>,
}

impl QuizSnapshot {
    /// Drag gestures are accepted.
    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing && !self.paused
    }
}
