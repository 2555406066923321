//! Rendering layer.
//!
//! The game draws through the [`Canvas`] trait in window-pixel coordinates.
//! `terminal` rasterizes those calls to a crossterm frame; tests use a
//! recording canvas instead.

pub mod canvas;
pub mod terminal;

pub use canvas::{Canvas, Color, Point, Rect, Shape};
