//! Terminal canvas.
//!
//! Collects pixel-space draw calls for one frame and paints them with
//! ratatui's canvas widget on `present`. The widget's y axis points up, so
//! every y coordinate is flipped against the viewport height.

use ratatui::backend::Backend;
use ratatui::style::{self, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line as TextLine;
use ratatui::widgets::canvas::{self as widget, Context, Line, Points, Rectangle};
use ratatui::Terminal;
use log::trace;

use crate::config::display::{FILL_STEP, VIEWPORT_HEIGHT, VIEWPORT_WIDTH, VIEWPORT_X};
use crate::game::error::GameError;
use crate::render::canvas::{Canvas, Color, Point, Rect};

#[derive(Debug, Clone, PartialEq)]
enum DrawOp {
    Line(Point, Point, Color),
    FillRect(Rect, Color),
    OutlineRect(Rect, Color),
    FillCircle(Point, f32, Color),
    Text(Point, String, Color),
}

pub struct TerminalCanvas<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    background: Color,
    ops: Vec<DrawOp>,
}

impl<'a, B: Backend> TerminalCanvas<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>) -> Self {
        Self { terminal, background: Color::Black, ops: Vec::new() }
    }
}

fn to_ratatui(color: Color) -> style::Color {
    match color {
        Color::Black => style::Color::Black,
        Color::White => style::Color::White,
        Color::Red => style::Color::Red,
        Color::Green => style::Color::Green,
        Color::Blue => style::Color::Blue,
        Color::Yellow => style::Color::Yellow,
    }
}

fn flip(y: f32) -> f64 {
    (VIEWPORT_HEIGHT - y) as f64
}

/// Dots covering every sample point of `rect` that passes `inside`.
fn fill_points(rect: Rect, inside: impl Fn(Point) -> bool) -> Vec<(f64, f64)> {
    let cols = (rect.w / FILL_STEP).ceil().max(0.0) as usize;
    let rows = (rect.h / FILL_STEP).ceil().max(0.0) as usize;
    let mut coords = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            let p = Point::new(
                rect.x + (col as f32 + 0.5) * FILL_STEP,
                rect.y + (row as f32 + 0.5) * FILL_STEP,
            );
            if inside(p) {
                coords.push((p.x as f64, flip(p.y)));
            }
        }
    }
    coords
}

fn paint(ctx: &mut Context, ops: &[DrawOp]) {
    for op in ops {
        match op {
            DrawOp::Line(from, to, color) => ctx.draw(&Line {
                x1: from.x as f64,
                y1: flip(from.y),
                x2: to.x as f64,
                y2: flip(to.y),
                color: to_ratatui(*color),
            }),
            DrawOp::OutlineRect(rect, color) => ctx.draw(&Rectangle {
                x: rect.x as f64,
                y: flip(rect.y + rect.h),
                width: rect.w as f64,
                height: rect.h as f64,
                color: to_ratatui(*color),
            }),
            DrawOp::FillRect(rect, color) => {
                let coords = fill_points(*rect, |p| rect.contains(p));
                ctx.draw(&Points { coords: &coords, color: to_ratatui(*color) });
            }
            DrawOp::FillCircle(center, radius, color) => {
                let bounds = Rect::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0);
                let coords = fill_points(bounds, |p| {
                    let (dx, dy) = (p.x - center.x, p.y - center.y);
                    dx * dx + dy * dy <= radius * radius
                });
                ctx.draw(&Points { coords: &coords, color: to_ratatui(*color) });
            }
            DrawOp::Text(at, text, color) => ctx.print(
                at.x as f64,
                flip(at.y),
                TextLine::styled(text.clone(), Style::default().fg(to_ratatui(*color))),
            ),
        }
        // Later calls paint over earlier ones.
        ctx.layer();
    }
}

impl<B: Backend> Canvas for TerminalCanvas<'_, B> {
    fn clear(&mut self, color: Color) {
        self.background = color;
        self.ops.clear();
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.ops.push(DrawOp::Line(from, to, color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect(rect, color));
    }

    /// Thickness is below one braille dot, so edges are single lines.
    fn outline_rect(&mut self, rect: Rect, _thickness: f32, color: Color) {
        self.ops.push(DrawOp::OutlineRect(rect, color));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.ops.push(DrawOp::FillCircle(center, radius, color));
    }

    fn draw_text(&mut self, at: Point, text: &str, color: Color) {
        self.ops.push(DrawOp::Text(at, text.to_string(), color));
    }

    fn present(&mut self) -> Result<(), GameError> {
        let ops: &[DrawOp] = &self.ops;
        let background = to_ratatui(self.background);
        self.terminal.draw(|frame| {
            let scene = widget::Canvas::default()
                .marker(Marker::Braille)
                .background_color(background)
                .x_bounds([VIEWPORT_X as f64, (VIEWPORT_X + VIEWPORT_WIDTH) as f64])
                .y_bounds([0.0, VIEWPORT_HEIGHT as f64])
                .paint(|ctx| paint(ctx, ops));
            frame.render_widget(scene, frame.area());
        })?;
        trace!("[TerminalCanvas] Presented {} draw calls", ops.len());
        Ok(())
    }
}
