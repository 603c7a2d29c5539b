//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`crate::types::QuizAction`].
//! Mouse mapping needs to know what sits under the pointer, so it takes a
//! hit-test closure supplied by the view that drew the last frame.

pub mod map;

pub use keyword_match_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit};
