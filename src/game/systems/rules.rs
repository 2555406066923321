//! Stability rules.
//!
//! A node is connected when a neighboring active link points at it: left and
//! right neighbors must be horizontal, up and down neighbors vertical.
//! Activation latches until the next reset.

use log::debug;

use crate::config::game::{LINK_PENALTY, UNCONNECTED_NODE_PENALTY};
use crate::game::grid::{cell_at, cell_at_mut, count_links, neighbor, node_positions};
use crate::game::state::GameState;
use crate::game::types::{Cell, Direction, Grid, Position, Rotation};

/// Rotation a link needs to carry connectivity toward a node from `direction`.
fn required_rotation(direction: Direction) -> Rotation {
    match direction {
        Direction::Left | Direction::Right => Rotation::Horizontal,
        Direction::Up | Direction::Down => Rotation::Vertical,
    }
}

/// True if any neighbor of `pos` is an active link oriented toward it.
pub fn is_connected(grid: &Grid, pos: Position) -> bool {
    [Direction::Left, Direction::Right, Direction::Up, Direction::Down]
        .into_iter()
        .any(|direction| {
            neighbor(grid, pos, direction)
                .and_then(|n| cell_at(grid, n))
                .and_then(Cell::as_link)
                .is_some_and(|link| link.is_active && link.rotation == required_rotation(direction))
        })
}

/// Activate newly connected nodes and return the stability score.
pub fn compute_stability(grid: &mut Grid) -> f32 {
    let mut stability = 0.0;

    for pos in node_positions(grid) {
        let already_active = cell_at(grid, pos).is_some_and(Cell::is_active);
        if already_active {
            continue;
        }
        if is_connected(grid, pos) {
            if let Some(Cell::Node(node)) = cell_at_mut(grid, pos) {
                node.set_active(true);
                debug!("[Rules] Node at ({}, {}) connected", pos.x, pos.y);
            }
        } else {
            stability += UNCONNECTED_NODE_PENALTY;
        }
    }

    stability + count_links(grid) as f32 * LINK_PENALTY
}

/// One update tick. Does nothing while the puzzle is paused.
pub fn apply_rules(game_state: &mut GameState) {
    if !game_state.is_running {
        return;
    }
    game_state.stability = compute_stability(&mut game_state.grid);
    game_state.tick += 1;
}
