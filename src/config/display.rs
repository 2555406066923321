/// Display configuration constants.
///
/// Layout is expressed in window pixels; the terminal canvas scales it down
/// to character cells.

/// Top-left corner of the grid, in pixels.
pub const GRID_ORIGIN_X: f32 = 250.0;
pub const GRID_ORIGIN_Y: f32 = 150.0;

/// Side of one grid cell, in pixels.
pub const CELL_SIZE: f32 = 50.0;

pub const CURSOR_THICKNESS: f32 = 2.0;

pub const NODE_RADIUS: f32 = 10.0;

/// Long and short side of a link bar, in pixels.
pub const LINK_LENGTH: f32 = 50.0;
pub const LINK_WIDTH: f32 = 10.0;

/// Stability bar placement and geometry.
pub const BAR_X: f32 = 300.0;
pub const BAR_Y: f32 = 50.0;
pub const BAR_MAX_WIDTH: f32 = 200.0;
pub const BAR_HEIGHT: f32 = 20.0;

/// Stability that fills the bar completely.
pub const BAR_FULL_SCALE: f32 = 100.0;

/// Above this stability the bar turns red.
pub const BAR_DANGER_THRESHOLD: f32 = 80.0;

/// Where the status line is printed, in pixels.
pub const STATUS_X: f32 = 250.0;
pub const STATUS_Y: f32 = 20.0;

/// Default frames per second for the interactive loop.
pub const DEFAULT_FPS: u32 = 60;

/// Pixel-space window shown in the terminal. The top edge is y = 0.
pub const VIEWPORT_X: f32 = 240.0;
pub const VIEWPORT_WIDTH: f32 = 270.0;
pub const VIEWPORT_HEIGHT: f32 = 420.0;

/// Spacing of the dots used to fill shapes, in pixels.
pub const FILL_STEP: f32 = 1.0;
