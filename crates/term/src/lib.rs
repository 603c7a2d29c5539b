//! Terminal renderer module for the quiz.
//!
//! Renders into a simple framebuffer that is diffed and flushed to the
//! terminal, without a widget toolkit in between.
//!
//! - `core` stays deterministic and testable
//! - [`QuizView`] is pure: snapshot in, framebuffer and hit-test [`Layout`] out
//! - [`TerminalRenderer`] owns raw mode, the alternate screen and mouse capture

pub mod fb;
pub mod quiz_view;
pub mod renderer;

pub use keyword_match_core as core;
pub use keyword_match_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use quiz_view::{leaderboard_line, Layout, QuizView, Rect, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
