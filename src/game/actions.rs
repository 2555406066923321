//! Player actions.
//!
//! Every input source (terminal keys, headless commands) is translated into
//! a [`PlayerAction`] before it touches the game state.

use std::str::FromStr;

use crate::game::error::GameError;
use crate::game::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Quit,
    /// Restore the starting layout and pause.
    Reset,
    /// Start or pause the update tick.
    ToggleRun,
    Move(Direction),
    /// Put a link on the cursor cell if it is empty.
    Place,
    /// Rotate whatever sits on the cursor cell.
    Rotate,
}

impl FromStr for PlayerAction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quit" | "exit" => Ok(PlayerAction::Quit),
            "reset" => Ok(PlayerAction::Reset),
            "toggle" | "run" | "pause" => Ok(PlayerAction::ToggleRun),
            "up" => Ok(PlayerAction::Move(Direction::Up)),
            "down" => Ok(PlayerAction::Move(Direction::Down)),
            "left" => Ok(PlayerAction::Move(Direction::Left)),
            "right" => Ok(PlayerAction::Move(Direction::Right)),
            "place" => Ok(PlayerAction::Place),
            "rotate" => Ok(PlayerAction::Rotate),
            other => Err(GameError::UnknownCommand(other.to_string())),
        }
    }
}
