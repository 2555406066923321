//! Render system.
//!
//! Draws the game state onto any [`Canvas`]: grid, cursor, entities,
//! stability bar and a status line.

use crate::config::display::*;
use crate::config::game::{GRID_COL, GRID_ROW};
use crate::game::error::GameResult;
use crate::game::state::GameState;
use crate::game::types::Position;
use crate::render::{Canvas, Color, Point, Rect};

/// Pixel rectangle covered by a grid cell.
pub fn cell_rect(pos: Position) -> Rect {
    Rect::new(
        GRID_ORIGIN_X + pos.x as f32 * CELL_SIZE,
        GRID_ORIGIN_Y + pos.y as f32 * CELL_SIZE,
        CELL_SIZE,
        CELL_SIZE,
    )
}

pub fn cell_center(pos: Position) -> Point {
    let rect = cell_rect(pos);
    Point::new(rect.x + rect.w / 2.0, rect.y + rect.h / 2.0)
}

/// Stability bar rectangle and color. Width is clamped to the bar's maximum.
pub fn stability_bar(stability: f32) -> (Rect, Color) {
    let width = (BAR_MAX_WIDTH * (stability / BAR_FULL_SCALE)).clamp(0.0, BAR_MAX_WIDTH);
    let color = if stability > BAR_DANGER_THRESHOLD { Color::Red } else { Color::Green };
    (Rect::new(BAR_X, BAR_Y, width, BAR_HEIGHT), color)
}

pub fn status_line(game_state: &GameState) -> String {
    format!(
        "Stability: {:>5.1}  [{}]",
        game_state.stability,
        if game_state.is_running { "running" } else { "paused" }
    )
}

fn draw_grid(canvas: &mut impl Canvas) {
    let right = GRID_ORIGIN_X + GRID_COL as f32 * CELL_SIZE;
    let bottom = GRID_ORIGIN_Y + GRID_ROW as f32 * CELL_SIZE;

    for i in 0..=GRID_ROW {
        let y = GRID_ORIGIN_Y + i as f32 * CELL_SIZE;
        canvas.draw_line(Point::new(GRID_ORIGIN_X, y), Point::new(right, y), Color::White);
    }
    for i in 0..=GRID_COL {
        let x = GRID_ORIGIN_X + i as f32 * CELL_SIZE;
        canvas.draw_line(Point::new(x, GRID_ORIGIN_Y), Point::new(x, bottom), Color::White);
    }
}

/// Draw and present one frame.
pub fn render(game_state: &GameState, canvas: &mut impl Canvas) -> GameResult<()> {
    canvas.clear(Color::Black);

    draw_grid(canvas);
    canvas.outline_rect(cell_rect(game_state.cursor), CURSOR_THICKNESS, Color::Yellow);

    for cell in game_state.grid.iter().flatten().flatten() {
        if let Some(shape) = cell.shape() {
            canvas.draw_shape(&shape);
        }
    }

    let (bar, color) = stability_bar(game_state.stability);
    canvas.fill_rect(bar, color);
    canvas.draw_text(Point::new(STATUS_X, STATUS_Y), &status_line(game_state), Color::White);

    canvas.present()
}
