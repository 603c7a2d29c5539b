//! Scoring module - answer checking and the best-times leaderboard

use arrayvec::ArrayVec;
use chrono::{DateTime, Utc};

use crate::board::Board;
use crate::drag::SlotAssignment;
use crate::types::{format_mm_ss, Mark, SlotId, TileId, ROUND_SIZE};

/// Outcome of checking a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub correct: usize,
    pub total: usize,
    /// Active time the round took.
    pub elapsed_ms: u64,
    /// One mark per slot, in slot order.
    marks: ArrayVec<Mark, ROUND_SIZE>,
    /// Tile that sat in each slot when checked.
    placed: ArrayVec<Option<TileId>, ROUND_SIZE>,
}

impl RoundResult {
    /// Every slot matched. An empty board is never perfect.
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }

    pub fn slot_mark(&self, slot: SlotId) -> Option<Mark> {
        self.marks.get(slot.index()).copied()
    }

    /// Mark of a tile, if it was placed in a slot when checked.
    pub fn tile_mark(&self, tile: TileId) -> Option<Mark> {
        self.placed
            .iter()
            .position(|&p| p == Some(tile))
            .and_then(|i| self.marks.get(i).copied())
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn feedback_message(&self) -> String {
        if self.is_perfect() {
            format!(
                "🎉 Excellent! You got all {} correct in {}!",
                self.total,
                format_mm_ss(self.elapsed_ms)
            )
        } else {
            format!(
                "You got {} out of {} correct. Keep practicing!",
                self.correct, self.total
            )
        }
    }
}

/// Compare every slot's occupant with its answer. Empty slots are incorrect.
pub fn check_answers(board: &Board, assignment: &SlotAssignment, elapsed_ms: u64) -> RoundResult {
    let mut marks = ArrayVec::new();
    let mut placed = ArrayVec::new();
    let mut correct = 0;

    for slot in board.slots() {
        let occupant = assignment.occupant(slot.id);
        let mark = if occupant == Some(slot.answer()) {
            correct += 1;
            Mark::Correct
        } else {
            Mark::Incorrect
        };
        marks.push(mark);
        placed.push(occupant);
    }

    RoundResult {
        correct,
        total: board.len(),
        elapsed_ms,
        marks,
        placed,
    }
}

/// A perfect round's completion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRecord {
    pub elapsed_ms: u64,
    pub completed_at: DateTime<Utc>,
}

impl ScoreRecord {
    pub fn new(elapsed_ms: u64, completed_at: DateTime<Utc>) -> Self {
        Self {
            elapsed_ms,
            completed_at,
        }
    }
}

/// Score records kept sorted by ascending elapsed time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    records: Vec<ScoreRecord>,
}

impl Leaderboard {
    /// Build from records in any order.
    pub fn new(mut records: Vec<ScoreRecord>) -> Self {
        records.sort_by_key(|r| r.elapsed_ms);
        Self { records }
    }

    /// Add a record, returning its 1-based rank.
    ///
    /// Ties rank after existing records with the same time.
    pub fn record(&mut self, record: ScoreRecord) -> usize {
        let idx = self
            .records
            .partition_point(|r| r.elapsed_ms <= record.elapsed_ms);
        self.records.insert(idx, record);
        idx + 1
    }

    /// Records fastest first.
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// `(rank, record)` pairs, rank starting at 1.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &ScoreRecord)> {
        self.records.iter().enumerate().map(|(i, r)| (i + 1, r))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
