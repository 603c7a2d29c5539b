//! Quiz session - the whole game state behind one value
//!
//! A session owns the content set, the persisted usage map and leaderboard,
//! and the state of the round in progress (board, slot assignment, drag
//! gesture, timer, keyboard cursor). Every user trigger goes through
//! [`QuizSession::apply_action`]; the one-second display tick goes through
//! [`QuizSession::tick`]. Both take the current epoch time in milliseconds.

use chrono::{DateTime, Utc};

use crate::board::Board;
use crate::content::CELL_BIOLOGY;
use crate::drag::{DragController, DropOutcome, SlotAssignment};
use crate::rng::SimpleRng;
use crate::scoring::{check_answers, Leaderboard, RoundResult, ScoreRecord};
use crate::selector::{select_round, UsageMap};
use crate::snapshot::{CursorColumn, LeaderboardRow, QuizSnapshot, SlotSnapshot, TileSnapshot};
use crate::store::QuizStore;
use crate::timer::RoundTimer;
use crate::types::{DropTarget, KeywordEntry, Phase, QuizAction, SlotId, TileId};

/// Keyboard cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub column: CursorColumn,
    pub index: usize,
}

pub struct QuizSession<S> {
    content: Vec<KeywordEntry>,
    store: S,
    rng: SimpleRng,
    usage: UsageMap,
    leaderboard: Leaderboard,
    phase: Phase,
    board: Board,
    assignment: SlotAssignment,
    drag: DragController,
    timer: RoundTimer,
    cursor: Cursor,
    result: Option<RoundResult>,
}

impl<S: QuizStore> QuizSession<S> {
    /// Create a session over `content`, loading persisted state from `store`.
    pub fn new(content: Vec<KeywordEntry>, mut store: S, seed: u32) -> Self {
        let usage = store.load_usage();
        let leaderboard = Leaderboard::new(store.load_scores());
        tracing::debug!(
            entries = content.len(),
            tracked = usage.len(),
            scores = leaderboard.len(),
            "session created"
        );

        Self {
            content,
            store,
            rng: SimpleRng::new(seed),
            usage,
            leaderboard,
            phase: Phase::Idle,
            board: Board::empty(),
            assignment: SlotAssignment::default(),
            drag: DragController::new(),
            timer: RoundTimer::new(),
            cursor: Cursor::default(),
            result: None,
        }
    }

    /// Session over the shipped cell-biology content.
    pub fn with_shipped_content(store: S, seed: u32) -> Self {
        Self::new(CELL_BIOLOGY.to_vec(), store, seed)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.timer.is_paused()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn assignment(&self) -> &SlotAssignment {
        &self.assignment
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn timer(&self) -> &RoundTimer {
        &self.timer
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn usage(&self) -> &UsageMap {
        &self.usage
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Result of the last checked round.
    pub fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    pub fn feedback(&self) -> Option<String> {
        self.result.as_ref().map(RoundResult::feedback_message)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// When the session next wants a [`tick`](Self::tick), if ever.
    pub fn next_wakeup(&self) -> Option<u64> {
        self.timer.next_display_due()
    }

    /// Advance the timer display. Returns whether it changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.timer.poll_display(now_ms)
    }

    /// Apply a user action. Returns whether anything changed.
    pub fn apply_action(&mut self, action: QuizAction, now_ms: u64) -> bool {
        match action {
            QuizAction::StartGame => {
                self.start_round(now_ms);
                true
            }
            QuizAction::PlayAgain => {
                if self.phase != Phase::Finished {
                    return false;
                }
                self.start_round(now_ms);
                true
            }
            _ if self.phase != Phase::Playing => false,
            QuizAction::CheckAnswers => {
                if self.paused() {
                    return false;
                }
                self.check(now_ms);
                true
            }
            QuizAction::Pause => self.timer.pause(now_ms),
            QuizAction::Continue => self.timer.resume(now_ms),
            _ if self.paused() => false,
            QuizAction::PickUp(tile) => self.drag.pick_up(tile, &self.board, false),
            QuizAction::Hover(target) => self.drag.set_hover(target, false),
            QuizAction::Drop(target) => self.drop_on(target),
            QuizAction::CancelDrag => self.drag.cancel(),
            QuizAction::CursorUp => self.move_cursor(-1),
            QuizAction::CursorDown => self.move_cursor(1),
            QuizAction::CursorSwitch => {
                self.cursor.column = match self.cursor.column {
                    CursorColumn::Pool => CursorColumn::Slots,
                    CursorColumn::Slots => CursorColumn::Pool,
                };
                self.clamp_cursor();
                self.hover_cursor();
                true
            }
            QuizAction::Activate => self.activate(),
        }
    }

    fn start_round(&mut self, now_ms: u64) {
        self.timer.reset();
        self.drag.cancel();
        self.result = None;
        self.cursor = Cursor::default();

        let round = select_round(&self.content, &mut self.usage, now_ms, &mut self.rng);
        if let Err(e) = self.store.save_usage(&self.usage) {
            tracing::warn!("failed to save keyword usage: {e:#}");
        }

        self.board = Board::deal(&round, &mut self.rng);
        self.assignment = SlotAssignment::new(self.board.len());
        self.timer.start(now_ms);
        self.phase = Phase::Playing;
        tracing::info!(slots = self.board.len(), "round started");
    }

    fn check(&mut self, now_ms: u64) {
        let elapsed_ms = self.timer.stop(now_ms).unwrap_or(0);
        self.drag.cancel();

        let result = check_answers(&self.board, &self.assignment, elapsed_ms);
        tracing::info!(
            correct = result.correct,
            total = result.total,
            elapsed_ms,
            "answers checked"
        );

        if result.is_perfect() {
            let record = ScoreRecord::new(elapsed_ms, millis_to_utc(now_ms));
            let rank = self.leaderboard.record(record);
            tracing::info!(rank, elapsed_ms, "score recorded");
            if let Err(e) = self.store.save_scores(self.leaderboard.records()) {
                tracing::warn!("failed to save scores: {e:#}");
            }
        }

        self.result = Some(result);
        self.phase = Phase::Finished;
    }

    fn drop_on(&mut self, target: DropTarget) -> bool {
        let outcome = self.drag.drop_on(target, &mut self.assignment, false);
        self.clamp_cursor();
        match outcome {
            DropOutcome::Rejected => false,
            // The gesture itself ended, which is a visible change.
            DropOutcome::Unchanged | DropOutcome::Placed { .. } | DropOutcome::Returned { .. } => true,
        }
    }

    fn pool_len(&self) -> usize {
        self.board.pool_tiles(&self.assignment).count()
    }

    fn column_len(&self, column: CursorColumn) -> usize {
        match column {
            CursorColumn::Pool => self.pool_len(),
            CursorColumn::Slots => self.board.len(),
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.column_len(self.cursor.column);
        self.cursor.index = self.cursor.index.min(len.saturating_sub(1));
    }

    fn move_cursor(&mut self, delta: isize) -> bool {
        let len = self.column_len(self.cursor.column);
        if len == 0 {
            return false;
        }
        let next = self
            .cursor
            .index
            .saturating_add_signed(delta)
            .min(len - 1);
        if next == self.cursor.index {
            return false;
        }
        self.cursor.index = next;
        self.hover_cursor();
        true
    }

    fn cursor_target(&self) -> DropTarget {
        match self.cursor.column {
            CursorColumn::Pool => DropTarget::Pool,
            CursorColumn::Slots => DropTarget::Slot(SlotId(self.cursor.index as u8)),
        }
    }

    /// While dragging from the keyboard, the cursor is the pointer.
    fn hover_cursor(&mut self) {
        if self.drag.dragging().is_some() {
            let target = self.cursor_target();
            self.drag.set_hover(Some(target), false);
        }
    }

    fn tile_at_cursor(&self) -> Option<TileId> {
        match self.cursor.column {
            CursorColumn::Pool => self
                .board
                .pool_tiles(&self.assignment)
                .nth(self.cursor.index)
                .map(|t| t.id),
            CursorColumn::Slots => self.assignment.occupant(SlotId(self.cursor.index as u8)),
        }
    }

    fn activate(&mut self) -> bool {
        if self.drag.dragging().is_some() {
            return self.drop_on(self.cursor_target());
        }

        let Some(tile) = self.tile_at_cursor() else {
            return false;
        };
        if !self.drag.pick_up(tile, &self.board, false) {
            return false;
        }
        if self.cursor.column == CursorColumn::Pool {
            self.cursor.column = CursorColumn::Slots;
            self.clamp_cursor();
        }
        self.hover_cursor();
        true
    }

    /// Project the session into render data.
    pub fn snapshot(&self) -> QuizSnapshot {
        let lifted = self.drag.dragging();
        let result = self.result.as_ref();
        let focus_visible = self.phase == Phase::Playing;

        let tile_snapshot = |id: TileId, focused: bool| -> Option<TileSnapshot> {
            let tile = self.board.tile(id)?;
            Some(TileSnapshot {
                id,
                keyword: tile.keyword.to_string(),
                focused,
                lifted: lifted == Some(id),
                mark: result.and_then(|r| r.tile_mark(id)),
            })
        };

        let slots = self
            .board
            .slots()
            .iter()
            .map(|slot| {
                let focused = focus_visible
                    && self.cursor.column == CursorColumn::Slots
                    && self.cursor.index == slot.id.index();
                SlotSnapshot {
                    id: slot.id,
                    number: slot.number(),
                    definition: slot.definition.to_string(),
                    occupant: self
                        .assignment
                        .occupant(slot.id)
                        .and_then(|t| tile_snapshot(t, false)),
                    hovered: self.drag.hover() == Some(DropTarget::Slot(slot.id)),
                    focused,
                    mark: result.and_then(|r| r.slot_mark(slot.id)),
                }
            })
            .collect();

        let pool = self
            .board
            .pool_tiles(&self.assignment)
            .enumerate()
            .filter_map(|(i, t)| {
                let focused = focus_visible
                    && self.cursor.column == CursorColumn::Pool
                    && self.cursor.index == i;
                tile_snapshot(t.id, focused)
            })
            .collect();

        let leaderboard = self
            .leaderboard
            .ranked()
            .map(|(rank, r)| LeaderboardRow {
                rank,
                elapsed_ms: r.elapsed_ms,
                completed_at: r.completed_at,
            })
            .collect();

        QuizSnapshot {
            phase: self.phase,
            paused: self.paused(),
            timer_text: self.timer.display_text(),
            slots,
            pool,
            pool_hovered: self.drag.hover() == Some(DropTarget::Pool),
            dragging: lifted.and_then(|t| tile_snapshot(t, false)),
            cursor_column: self.cursor.column,
            feedback: self.feedback(),
            leaderboard,
        }
    }
}

fn millis_to_utc(now_ms: u64) -> DateTime<Utc> {
    i64::try_from(now_ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .unwrap_or_default()
}
