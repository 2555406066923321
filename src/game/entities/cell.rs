//! Behavior shared by every grid cell, dispatched by variant.

use crate::game::types::{Cell, Link, Node, Position};
use crate::render::Shape;

impl Cell {
    pub fn pos(&self) -> Position {
        match self {
            Cell::Node(node) => node.pos,
            Cell::Link(link) => link.pos,
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            Cell::Node(node) => node.is_active,
            Cell::Link(link) => link.is_active,
        }
    }

    /// Rotate the cell. Nodes don't rotate.
    pub fn rotate(&mut self) {
        match self {
            Cell::Node(_) => {}
            Cell::Link(link) => link.rotate(),
        }
    }

    /// Inactive links are not drawn.
    pub fn shape(&self) -> Option<Shape> {
        match self {
            Cell::Node(node) => Some(node.shape()),
            Cell::Link(link) if link.is_active => Some(link.shape()),
            Cell::Link(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Cell::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_link(&self) -> Option<&Link> {
        match self {
            Cell::Link(link) => Some(link),
            _ => None,
        }
    }
}
