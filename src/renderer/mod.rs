//! Drawing surface abstraction
//!
//! The simulation writes to a [`Canvas`]; the browser driver backs it with an
//! HTML canvas 2D context, the headless driver and tests with a
//! [`RecordingCanvas`].

pub mod scene;

use glam::Vec2;

pub use scene::{draw_asteroid, draw_projectile, draw_ship};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Pale green of the ship's body
    pub const SAGE: Color = Color::rgb(0xb7, 0xc7, 0xa5);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#b7c7a5`
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A 2D surface that accepts primitive shapes
pub trait Canvas {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Stroke a closed polygon through `points`
    fn stroke_polygon(&mut self, points: &[Vec2], color: Color);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    StrokePolygon {
        points: Vec<Vec2>,
        color: Color,
    },
}

/// Canvas that keeps the draw calls of the current frame
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for RecordingCanvas {
    /// A clear starts a new frame, so earlier commands are discarded
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::StrokePolygon {
            points: points.to_vec(),
            color,
        });
    }
}
