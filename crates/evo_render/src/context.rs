//! 2D drawing context abstraction
//!
//! The subset of a canvas-style API the viewer needs. Coordinates passed in are
//! logical pixels; implementations apply the scale set through [`DrawingContext::set_scale`].

use glam::Vec2;

/// Linear RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

pub trait DrawingContext {
    /// Uniform scale applied to every coordinate drawn afterwards.
    fn set_scale(&mut self, factor: f32);

    /// Erase everything drawn since the last clear.
    fn clear(&mut self);

    /// Fill a convex polygon.
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}
