/// Main configuration module.
///
/// Re-exports submodules for game rules and display layout.
pub mod game;
pub mod display;
