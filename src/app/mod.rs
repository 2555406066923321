//! Front-end layer.
//!
//! Drives the game state from a real terminal (`game_loop`) or from
//! line-based commands on stdin (`headless`).

pub mod input;
pub mod tui;
pub mod game_loop;
pub mod headless;
