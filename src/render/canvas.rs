use crate::game::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
    Red,
    Green,
    Blue,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }
}

/// Filled shape an entity renders as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { center: Point, radius: f32, color: Color },
    Rect { rect: Rect, color: Color },
}

/// Minimal drawing capability needed by the render system.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn draw_line(&mut self, from: Point, to: Point, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn outline_rect(&mut self, rect: Rect, thickness: f32, color: Color);
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
    fn draw_text(&mut self, at: Point, text: &str, color: Color);
    /// Flush the finished frame to the output.
    fn present(&mut self) -> Result<(), GameError>;

    fn draw_shape(&mut self, shape: &Shape) {
        match *shape {
            Shape::Circle { center, radius, color } => self.fill_circle(center, radius, color),
            Shape::Rect { rect, color } => self.fill_rect(rect, color),
        }
    }
}
