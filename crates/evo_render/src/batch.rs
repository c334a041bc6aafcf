//! CPU-side shape batch
//!
//! Shapes are tessellated into a triangle list in device pixels. The GPU backend
//! converts the list to clip space and draws it in a single call.

use crate::context::{Color, DrawingContext};
use glam::Vec2;
use std::f32::consts::TAU;

/// Segments used to tessellate a circle.
const CIRCLE_SEGMENTS: usize = 16;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Triangle-list drawing context.
pub struct ShapeBatch {
    scale: f32,
    background: Color,
    vertices: Vec<Vertex>,
}

impl ShapeBatch {
    pub fn new(background: Color) -> Self {
        Self {
            scale: 1.0,
            background,
            vertices: Vec::new(),
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Vertices in device pixels, three per triangle.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Copy of the batch mapped into clip space for a backing store of the given size.
    /// Device y grows downwards, clip y grows upwards.
    pub fn to_clip_space(&self, backing_width: u32, backing_height: u32) -> Vec<Vertex> {
        let w = backing_width.max(1) as f32;
        let h = backing_height.max(1) as f32;

        self.vertices
            .iter()
            .map(|v| Vertex {
                position: [v.position[0] / w * 2.0 - 1.0, 1.0 - v.position[1] / h * 2.0],
                color: v.color,
            })
            .collect()
    }

    fn push(&mut self, point: Vec2, color: [f32; 4]) {
        let scaled = point * self.scale;
        self.vertices.push(Vertex {
            position: [scaled.x, scaled.y],
            color,
        });
    }
}

impl DrawingContext for ShapeBatch {
    fn set_scale(&mut self, factor: f32) {
        self.scale = factor;
    }

    fn clear(&mut self) {
        self.vertices.clear();
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let color = color.to_array();

        // Fan from the first vertex; callers only pass convex shapes.
        for pair in points[1..].windows(2) {
            self.push(points[0], color);
            self.push(pair[0], color);
            self.push(pair[1], color);
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let color = color.to_array();
        let rim = |i: usize| {
            let angle = i as f32 / CIRCLE_SEGMENTS as f32 * TAU;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        };

        for i in 0..CIRCLE_SEGMENTS {
            self.push(center, color);
            self.push(rim(i), color);
            self.push(rim(i + 1), color);
        }
    }
}
