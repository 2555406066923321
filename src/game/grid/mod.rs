//! Grid storage and slot helpers.

pub mod grid;

pub use grid::*;
