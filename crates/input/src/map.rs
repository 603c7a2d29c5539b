//! Key and mouse mapping from terminal events to quiz actions.

use crate::types::{Hit, QuizAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to quiz actions.
pub fn handle_key_event(key: KeyEvent) -> Option<QuizAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Phase controls
        KeyCode::Char('n') | KeyCode::Char('N') => Some(QuizAction::StartGame),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(QuizAction::PlayAgain),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(QuizAction::CheckAnswers),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(QuizAction::Pause),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(QuizAction::Continue),

        // Cursor
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(QuizAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(QuizAction::CursorDown),
        KeyCode::Left
        | KeyCode::Right
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('l')
        | KeyCode::Char('L') => Some(QuizAction::CursorSwitch),

        // Drag
        KeyCode::Char(' ') | KeyCode::Enter => Some(QuizAction::Activate),
        KeyCode::Esc => Some(QuizAction::CancelDrag),

        _ => None,
    }
}

/// Map mouse input to drag gestures.
///
/// `hit` resolves a terminal cell to whatever the last frame drew there.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    hit: impl Fn(u16, u16) -> Option<Hit>,
) -> Option<QuizAction> {
    let under = hit(mouse.column, mouse.row).unwrap_or_default();
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => under.tile.map(QuizAction::PickUp),
        MouseEventKind::Drag(MouseButton::Left) => Some(QuizAction::Hover(under.drop)),
        MouseEventKind::Up(MouseButton::Left) => Some(match under.drop {
            Some(target) => QuizAction::Drop(target),
            None => QuizAction::CancelDrag,
        }),
        _ => None,
    }
}

/// Check if key should quit the quiz.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
