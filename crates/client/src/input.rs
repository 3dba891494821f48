//! Input processing for the terminal client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use twenty48_core::Direction;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Push the tiles toward a side of the board.
    Move(Direction),
    /// Discard the current game and start over on level one.
    NewGame,
    /// Jump straight to the next level.
    NextLevel,
    /// No meaningful command was produced.
    None,
}

/// Converts a raw key event into a higher-level command.
pub fn key_action(key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Quit,
            _ => KeyAction::None,
        };
    }

    match key.code {
        KeyCode::Char(ch) => char_action(ch),
        KeyCode::Left => KeyAction::Move(Direction::Left),
        KeyCode::Right => KeyAction::Move(Direction::Right),
        KeyCode::Up => KeyAction::Move(Direction::Up),
        KeyCode::Down => KeyAction::Move(Direction::Down),
        KeyCode::Tab => KeyAction::NextLevel,
        KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

fn char_action(raw: char) -> KeyAction {
    match raw.to_ascii_lowercase() {
        'q' => KeyAction::Quit,
        'n' => KeyAction::NewGame,
        '>' => KeyAction::NextLevel,
        'h' | 'a' => KeyAction::Move(Direction::Left),
        'j' | 's' => KeyAction::Move(Direction::Down),
        'k' | 'w' => KeyAction::Move(Direction::Up),
        'l' | 'd' => KeyAction::Move(Direction::Right),
        _ => KeyAction::None,
    }
}
