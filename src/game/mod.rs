pub mod types;
pub mod error;
pub mod actions;
pub mod state;
pub mod tests;

pub mod entities;
pub mod grid;
pub mod systems;
