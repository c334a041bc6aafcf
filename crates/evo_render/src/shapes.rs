//! Agent and resource shapes
//!
//! Agents are isosceles triangles so heading reads at a glance; resources are dots.

use crate::context::{Color, DrawingContext};
use evo_core::mapper::heading;
use glam::Vec2;
use std::f32::consts::PI;

/// Bright neutral, reads against the dark background and the food dots.
pub const AGENT_COLOR: Color = Color::rgb(0.93, 0.93, 0.93);
/// Accent green for food.
pub const RESOURCE_COLOR: Color = Color::rgb(0.0, 1.0, 0.5);

/// Apex distance as a multiple of the agent size.
const APEX_SCALE: f32 = 1.5;
const BASE_OFFSET: f32 = 2.0 * PI / 3.0;

/// Draw an agent centred near `(px, py)` with its apex pointing along `rotation`.
pub fn draw_agent<C>(ctx: &mut C, px: f32, py: f32, size: f32, rotation: f32)
where
    C: DrawingContext + ?Sized,
{
    let center = Vec2::new(px, py);
    let points = [
        center + heading(rotation) * size * APEX_SCALE,
        center + heading(rotation + BASE_OFFSET) * size,
        center + heading(rotation - BASE_OFFSET) * size,
    ];
    ctx.fill_polygon(&points, AGENT_COLOR);
}

pub fn draw_resource<C>(ctx: &mut C, px: f32, py: f32, radius: f32)
where
    C: DrawingContext + ?Sized,
{
    ctx.fill_circle(Vec2::new(px, py), radius, RESOURCE_COLOR);
}

/// Shape sizes expressed as fractions of the viewport's logical width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub agent_size: f32,
    pub food_radius: f32,
}

impl RenderStyle {
    pub fn agent_size_px(&self, logical_width: f32) -> f32 {
        self.agent_size * logical_width
    }

    pub fn food_radius_px(&self, logical_width: f32) -> f32 {
        self.food_radius * logical_width
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            agent_size: 0.01,
            food_radius: 0.005,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        polygons: Vec<(Vec<Vec2>, Color)>,
        circles: Vec<(Vec2, f32, Color)>,
    }

    impl DrawingContext for Recorder {
        fn set_scale(&mut self, _factor: f32) {}
        fn clear(&mut self) {}

        fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
            self.polygons.push((points.to_vec(), color));
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.circles.push((center, radius, color));
        }
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn zero_rotation_apex_is_above_center() {
        let mut ctx = Recorder::default();
        draw_agent(&mut ctx, 100.0, 100.0, 10.0, 0.0);

        let (points, color) = &ctx.polygons[0];
        assert_eq!(points.len(), 3);
        assert!(close(points[0], Vec2::new(100.0, 85.0)));
        assert_eq!(*color, AGENT_COLOR);

        // Base vertices sit below the center, mirrored around the vertical axis.
        assert!(points[1].y > 100.0 && points[2].y > 100.0);
        assert!((points[1].x - 100.0 + points[2].x - 100.0).abs() < 1e-4);
    }

    #[test]
    fn base_vertices_at_size_distance() {
        let mut ctx = Recorder::default();
        let center = Vec2::new(40.0, 60.0);
        draw_agent(&mut ctx, center.x, center.y, 8.0, 1.1);

        let points = &ctx.polygons[0].0;
        assert!((points[0].distance(center) - 12.0).abs() < 1e-4);
        assert!((points[1].distance(center) - 8.0).abs() < 1e-4);
        assert!((points[2].distance(center) - 8.0).abs() < 1e-4);
    }

    #[test]
    fn quarter_turn_points_right() {
        let mut ctx = Recorder::default();
        draw_agent(&mut ctx, 0.0, 0.0, 2.0, std::f32::consts::FRAC_PI_2);
        assert!(close(ctx.polygons[0].0[0], Vec2::new(3.0, 0.0)));
    }

    #[test]
    fn resource_is_accent_circle() {
        let mut ctx = Recorder::default();
        draw_resource(&mut ctx, 5.0, 6.0, 2.5);
        assert_eq!(ctx.circles, vec![(Vec2::new(5.0, 6.0), 2.5, RESOURCE_COLOR)]);
        assert_ne!(RESOURCE_COLOR, AGENT_COLOR);
    }

    #[test]
    fn style_scales_with_width() {
        let style = RenderStyle::default();
        assert!((style.agent_size_px(800.0) - 8.0).abs() < 1e-5);
        assert!((style.food_radius_px(800.0) - 4.0).abs() < 1e-5);
    }
}
