//! Simulation space to logical pixel space
//!
//! Simulation coordinates live in `[0,1] x [0,1]` with the origin top-left, which is
//! also how the screen is laid out, so the mapping is a plain per-axis scale.
//! Points outside the unit square are extrapolated, not clamped.

use glam::Vec2;

/// Map a simulation-space point onto a canvas of the given logical size.
#[inline]
pub fn to_pixels(point: Vec2, logical_width: f32, logical_height: f32) -> Vec2 {
    Vec2::new(point.x * logical_width, point.y * logical_height)
}

/// Unit vector for a heading in screen space. Rotation 0 points up (decreasing y)
/// and positive angles turn clockwise.
#[inline]
pub fn heading(rotation: f32) -> Vec2 {
    let (sin, cos) = rotation.sin_cos();
    Vec2::new(sin, -cos)
}

/// Logical canvas dimensions bundled with the mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    logical_width: f32,
    logical_height: f32,
}

impl CoordinateMapper {
    pub fn new(logical_width: f32, logical_height: f32) -> Self {
        Self {
            logical_width,
            logical_height,
        }
    }

    pub fn logical_width(&self) -> f32 {
        self.logical_width
    }

    pub fn logical_height(&self) -> f32 {
        self.logical_height
    }

    pub fn to_pixels(&self, point: Vec2) -> Vec2 {
        to_pixels(point, self.logical_width, self.logical_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_canvas_corners() {
        assert_eq!(to_pixels(Vec2::ZERO, 800.0, 600.0), Vec2::ZERO);
        assert_eq!(to_pixels(Vec2::ONE, 800.0, 600.0), Vec2::new(800.0, 600.0));
    }

    #[test]
    fn axes_scale_independently() {
        let mapper = CoordinateMapper::new(400.0, 200.0);
        assert_eq!(mapper.to_pixels(Vec2::new(0.25, 0.5)), Vec2::new(100.0, 100.0));
        assert_eq!(mapper.to_pixels(Vec2::new(1.0, 0.0)), Vec2::new(400.0, 0.0));
    }

    #[test]
    fn out_of_range_points_are_extrapolated() {
        let mapper = CoordinateMapper::new(100.0, 50.0);
        assert_eq!(mapper.to_pixels(Vec2::new(-0.5, 1.5)), Vec2::new(-50.0, 75.0));
    }

    #[test]
    fn zero_rotation_heads_up() {
        let up = heading(0.0);
        assert!(up.x.abs() < 1e-6);
        assert!((up.y + 1.0).abs() < 1e-6);

        let right = heading(std::f32::consts::FRAC_PI_2);
        assert!((right.x - 1.0).abs() < 1e-6);
        assert!(right.y.abs() < 1e-6);
    }
}
