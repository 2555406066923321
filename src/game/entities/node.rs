//! Node entity logic.
//!
//! Nodes are placed by the layout, never by the player, and only change
//! state when the stability pass finds them connected.

use crate::game::types::{Node, Position};
use crate::render::{Color, Point, Shape};
use crate::config::display::NODE_RADIUS;
use crate::game::systems::render::cell_center;

impl Node {
    /// Create an inactive node at the given grid position.
    pub fn new(pos: Position) -> Self {
        Self { pos, is_active: false }
    }

    pub fn set_active(&mut self, state: bool) {
        self.is_active = state;
    }

    pub fn color(&self) -> Color {
        if self.is_active { Color::Green } else { Color::Red }
    }

    /// Circle centred in the node's cell.
    pub fn shape(&self) -> Shape {
        let center: Point = cell_center(self.pos);
        Shape::Circle { center, radius: NODE_RADIUS, color: self.color() }
    }
}
