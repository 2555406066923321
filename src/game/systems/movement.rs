//! Cursor movement system.
//!
//! This module handles moving the player's cursor on the grid.

use crate::game::types::{Direction, Position};
use crate::game::grid::neighbor;
use crate::game::state::GameState;

/// Move the cursor one cell in the given direction, stopping at the border.
/// Returns the new position.
pub fn move_cursor(game_state: &mut GameState, direction: Direction) -> Position {
    if let Some(next) = neighbor(&game_state.grid, game_state.cursor, direction) {
        game_state.cursor = next;
    }
    game_state.cursor
}
