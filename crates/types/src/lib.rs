//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Round Dimensions
//!
//! - **Round size**: 5 keyword/definition pairs per round
//! - **Slots**: one definition slot per pair, numbered 1-5 on screen
//! - **Tiles**: one keyword tile per pair, dealt in shuffled order
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DISPLAY_TICK_MS` | 1000 | Timer text refresh cadence while running |
//! | `IDLE_POLL_MS` | 250 | Input poll timeout when no tick is due |
//!
//! # Examples
//!
//! ```
//! use keyword_match_types::{format_mm_ss, SlotId, TileId, ROUND_SIZE};
//!
//! assert_eq!(ROUND_SIZE, 5);
//! assert_eq!(format_mm_ss(65_400), "01:05");
//! assert_eq!(SlotId(2).answer(), TileId(2));
//! ```

use std::borrow::Cow;

/// Number of keyword/definition pairs in one round.
pub const ROUND_SIZE: usize = 5;

/// Timer display refresh cadence while a round is running.
pub const DISPLAY_TICK_MS: u64 = 1000;

/// Input poll timeout when no display tick is pending.
pub const IDLE_POLL_MS: u64 = 250;

/// Placeholder shown when the leaderboard is empty.
pub const NO_SCORES_MESSAGE: &str = "No scores yet. Play a game to see your best times!";

/// Storage identifier of the keyword usage map.
pub const USED_KEYWORDS_KEY: &str = "b1_used_keywords";

/// Storage identifier of the score list.
pub const SCORES_KEY: &str = "b1_keyword_game_scores";

/// Format a millisecond duration as `MM:SS`.
///
/// Minutes are zero-padded to two digits and grow past 99 without wrapping.
///
/// # Examples
///
/// ```
/// use keyword_match_types::format_mm_ss;
///
/// assert_eq!(format_mm_ss(0), "00:00");
/// assert_eq!(format_mm_ss(59_999), "00:59");
/// assert_eq!(format_mm_ss(600_000), "10:00");
/// ```
pub fn format_mm_ss(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1000;
    format!("{:02}:{:02}", minutes, seconds)
}

/// One keyword and the definition it matches.
///
/// Entries are immutable. The shipped content set is a `'static` table, so
/// fields borrow by default; content loaded at runtime owns its strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeywordEntry {
    pub keyword: Cow<'static, str>,
    pub definition: Cow<'static, str>,
}

impl KeywordEntry {
    /// Build an entry from static strings (usable in `const` tables).
    pub const fn new(keyword: &'static str, definition: &'static str) -> Self {
        Self {
            keyword: Cow::Borrowed(keyword),
            definition: Cow::Borrowed(definition),
        }
    }

    /// Build an entry from owned strings.
    pub fn owned(keyword: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            keyword: Cow::Owned(keyword.into()),
            definition: Cow::Owned(definition.into()),
        }
    }
}

/// Identity of a keyword tile within the current round.
///
/// The id is the index of the tile's entry in the round, so tile `n` is the
/// correct answer for slot `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u8);

impl TileId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identity of a definition slot within the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub u8);

impl SlotId {
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The tile that correctly answers this slot.
    pub fn answer(self) -> TileId {
        TileId(self.0)
    }
}

/// Where a dragged tile can be released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// A definition slot's drop area.
    Slot(SlotId),
    /// The unplaced-tiles area.
    Pool,
}

/// What sits under a screen position, as reported by the view layout.
///
/// A tile resting in a slot reports both its tile and the slot target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hit {
    pub tile: Option<TileId>,
    pub drop: Option<DropTarget>,
}

/// Lifecycle phase of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No round yet: instructions and leaderboard.
    #[default]
    Idle,
    /// A round is on the board.
    Playing,
    /// Answers were checked: feedback, marks and leaderboard.
    Finished,
}

/// Correctness mark assigned to a slot (and its tile) by answer checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Correct,
    Incorrect,
}

/// Actions that can be applied to a quiz session
///
/// The first five are the page-level triggers; the pointer actions carry a
/// drag gesture; the cursor actions drive the same gesture from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    /// Deal a fresh round (from any phase)
    StartGame,
    /// Stop the timer and score the board
    CheckAnswers,
    /// Deal a fresh round after a finished one
    PlayAgain,
    /// Pause the timer and freeze the board
    Pause,
    /// Resume after a pause
    Continue,
    /// Pick up a tile (drag start)
    PickUp(TileId),
    /// Pointer moved over a drop target (or off all targets)
    Hover(Option<DropTarget>),
    /// Release the dragged tile onto a target
    Drop(DropTarget),
    /// Abandon the current drag
    CancelDrag,
    /// Move the keyboard cursor up
    CursorUp,
    /// Move the keyboard cursor down
    CursorDown,
    /// Switch the keyboard cursor between pool and definitions
    CursorSwitch,
    /// Pick up or drop at the keyboard cursor
    Activate,
}
