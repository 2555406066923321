//! Terminal key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::actions::PlayerAction;
use crate::game::types::Direction;

/// Map a key press to a player action. Unbound keys yield `None`.
pub fn map_key(key: KeyEvent) -> Option<PlayerAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(PlayerAction::Quit),
        KeyCode::Char('c') | KeyCode::Char('C') if ctrl => Some(PlayerAction::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') if ctrl => Some(PlayerAction::Reset),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(PlayerAction::Rotate),
        KeyCode::Enter => Some(PlayerAction::ToggleRun),
        KeyCode::Char(' ') => Some(PlayerAction::Place),
        KeyCode::Up => Some(PlayerAction::Move(Direction::Up)),
        KeyCode::Down => Some(PlayerAction::Move(Direction::Down)),
        KeyCode::Left => Some(PlayerAction::Move(Direction::Left)),
        KeyCode::Right => Some(PlayerAction::Move(Direction::Right)),
        _ => None,
    }
}
