//! Key mapping from terminal events to engine commands.

use crate::core::Command;
use crate::types::Move;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to the command it triggers, if any.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        code => code,
    };
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Some(Command::Move(Move::Left)),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => {
            Some(Command::Move(Move::Right))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Some(Command::Move(Move::Down)),

        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') | KeyCode::Char(' ') => {
            Some(Command::Rotate)
        }

        KeyCode::Char('r') => Some(Command::ResetState),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
