use serde::{Serialize, Deserialize};
use log::{debug, info};

use crate::config::game::{GRID_COL, GRID_ROW, NODE_LAYOUT};
use crate::game::actions::PlayerAction;
use crate::game::error::GameResult;
use crate::game::grid::{generate_layout, place_link, rotate_cell};
use crate::game::systems::{apply_rules, move_cursor};
use crate::game::types::{Cell, Grid, Position};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub cursor: Position,
    pub stability: f32,
    /// Update ticks only run while this is set.
    pub is_running: bool,
    pub tick: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Starting layout: nodes placed, no links, paused.
    pub fn new() -> Self {
        GameState {
            grid: generate_layout(GRID_ROW, GRID_COL, &NODE_LAYOUT),
            cursor: Position::default(),
            stability: 0.0,
            is_running: false,
            tick: 0,
        }
    }

    /// Restore the starting layout. The cursor stays where it is.
    pub fn reset(&mut self) {
        let cursor = self.cursor;
        *self = GameState { cursor, ..GameState::new() };
        info!("[GameState] Reset to starting layout");
    }

    /// Apply a player action. Returns true if the state changed.
    /// `Quit` never changes the state; the caller ends the loop.
    pub fn apply_player_action(&mut self, action: PlayerAction) -> bool {
        let changed = match action {
            PlayerAction::Quit => false,
            PlayerAction::Reset => {
                self.reset();
                true
            }
            PlayerAction::ToggleRun => {
                self.is_running = !self.is_running;
                info!("[GameState] {}", if self.is_running { "Running" } else { "Paused" });
                true
            }
            PlayerAction::Move(direction) => {
                let before = self.cursor;
                move_cursor(self, direction) != before
            }
            PlayerAction::Place => place_link(&mut self.grid, self.cursor),
            PlayerAction::Rotate => rotate_cell(&mut self.grid, self.cursor),
        };
        debug!(
            "[GameState] {:?} at ({}, {}) changed={}",
            action, self.cursor.x, self.cursor.y, changed
        );
        changed
    }

    /// Run one update tick.
    pub fn update(&mut self) {
        apply_rules(self);
    }

    pub fn node_count(&self) -> usize {
        self.grid.iter().flatten().flatten().filter(|c| matches!(c, Cell::Node(_))).count()
    }

    pub fn active_node_count(&self) -> usize {
        self.grid.iter().flatten().flatten()
            .filter_map(Cell::as_node)
            .filter(|node| node.is_active)
            .count()
    }

    /// True once every node has been connected.
    pub fn is_solved(&self) -> bool {
        self.active_node_count() == self.node_count()
    }

    /// Single-line JSON snapshot, used by the headless loop.
    pub fn snapshot_json(&self) -> GameResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
