//! Core quiz logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management, and round lifecycle.
//! It has **no dependencies** on terminal I/O or the filesystem, making it:
//!
//! - **Deterministic**: Same seed and timestamps produce identical rounds
//! - **Testable**: Every rule is exercised by plain unit tests
//! - **Portable**: Persistence and rendering are plugged in from outside
//!
//! # Module Structure
//!
//! - [`content`]: The shipped keyword/definition table
//! - [`selector`]: Least-recently-shown round selection and the usage map
//! - [`board`]: Definition slots and shuffled keyword tiles for one round
//! - [`drag`]: Slot assignment and the drag gesture state machine
//! - [`timer`]: Pause-aware round stopwatch with a one-second display tick
//! - [`scoring`]: Answer checking and the best-times leaderboard
//! - [`store`]: Persistence seam ([`QuizStore`]) and an in-memory store
//! - [`session`]: One value owning the whole game state
//! - [`snapshot`]: Render-ready projection of a session
//!
//! # Game Rules
//!
//! - **Round**: 5 keyword/definition pairs, stalest content first
//! - **Slots**: each definition accepts at most one keyword; dropping onto an
//!   occupied slot sends the previous keyword back to the pool
//! - **Pause**: freezes the timer and rejects every drag gesture
//! - **Scoring**: a round is perfect when every slot holds its keyword; only
//!   perfect rounds reach the leaderboard, ranked by active time
//!
//! # Example
//!
//! ```
//! use keyword_match_core::{MemoryStore, QuizSession};
//! use keyword_match_types::{DropTarget, Phase, QuizAction, SlotId, TileId};
//!
//! let mut session = QuizSession::with_shipped_content(MemoryStore::default(), 12345);
//! session.apply_action(QuizAction::StartGame, 1_000);
//!
//! // Tile n answers slot n.
//! for i in 0..5 {
//!     session.apply_action(QuizAction::PickUp(TileId(i)), 2_000);
//!     session.apply_action(QuizAction::Drop(DropTarget::Slot(SlotId(i))), 2_000);
//! }
//! session.apply_action(QuizAction::CheckAnswers, 31_000);
//!
//! assert_eq!(session.phase(), Phase::Finished);
//! assert_eq!(session.leaderboard().records()[0].elapsed_ms, 30_000);
//! ```

pub mod board;
pub mod content;
pub mod drag;
pub mod rng;
pub mod scoring;
pub mod selector;
pub mod session;
pub mod snapshot;
pub mod store;
pub mod timer;

pub use keyword_match_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Slot, Tile};
pub use content::CELL_BIOLOGY;
pub use drag::{DragController, DragState, DropOutcome, Location, SlotAssignment};
pub use rng::SimpleRng;
pub use scoring::{check_answers, Leaderboard, RoundResult, ScoreRecord};
pub use selector::{select_round, RoundState, UsageMap};
pub use session::{Cursor, QuizSession};
pub use snapshot::{CursorColumn, LeaderboardRow, QuizSnapshot, SlotSnapshot, TileSnapshot};
pub use store::{MemoryStore, QuizStore};
pub use timer::{RoundTimer, TimerState};
