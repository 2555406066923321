/// Game configuration constants.
///
/// This module defines the puzzle parameters: grid dimensions, the starting
/// node layout, and the stability penalties.
use crate::game::types::Position;

/// Number of rows in the game grid.
pub const GRID_ROW: usize = 5;

/// Number of columns in the game grid.
pub const GRID_COL: usize = 5;

/// Nodes placed on the grid at start and after every reset.
pub const NODE_LAYOUT: [Position; 3] = [
    Position { x: 1, y: 1 },
    Position { x: 3, y: 3 },
    Position { x: 4, y: 2 },
];

/// Penalty added for each node that is still unconnected after a tick.
pub const UNCONNECTED_NODE_PENALTY: f32 = 20.0;

/// Penalty added for each link on the grid.
pub const LINK_PENALTY: f32 = 5.0;
