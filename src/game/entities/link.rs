//! Link entity logic.
//!
//! Links are placed by the player on empty cells and carry connectivity
//! along one axis, selected by their rotation.

use crate::game::types::{Link, Position, Rotation};
use crate::render::{Color, Rect, Shape};
use crate::config::display::{LINK_LENGTH, LINK_WIDTH};
use crate::game::systems::render::cell_center;

impl Rotation {
    /// Quarter turn: horizontal <-> vertical.
    pub fn next(self) -> Self {
        match self {
            Rotation::Horizontal => Rotation::Vertical,
            Rotation::Vertical => Rotation::Horizontal,
        }
    }
}

impl Link {
    /// A freshly placed link is horizontal and active.
    pub fn new(pos: Position) -> Self {
        Self { pos, rotation: Rotation::Horizontal, is_active: true }
    }

    pub fn rotate(&mut self) {
        self.rotation = self.rotation.next();
    }

    /// Bar centred in the link's cell, oriented by rotation.
    pub fn shape(&self) -> Shape {
        let center = cell_center(self.pos);
        let (w, h) = match self.rotation {
            Rotation::Horizontal => (LINK_LENGTH, LINK_WIDTH),
            Rotation::Vertical => (LINK_WIDTH, LINK_LENGTH),
        };
        Shape::Rect {
            rect: Rect::new(center.x - w / 2.0, center.y - h / 2.0, w, h),
            color: Color::Blue,
        }
    }
}
