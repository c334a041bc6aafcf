//! Vision
//!
//! The eye splits its field of view into equal angular cells. Every food in range
//! adds to the cell it falls into, more the closer it is.

use crate::animal::Food;
use glam::Vec2;
use std::f32::consts::{FRAC_PI_4, PI, TAU};

/// How far an eye can see, in simulation units.
pub const FOV_RANGE: f32 = 0.25;
/// Field of view, centred on the heading.
pub const FOV_ANGLE: f32 = PI + FRAC_PI_4;
pub const CELLS: usize = 9;

#[derive(Debug, Clone)]
pub struct Eye {
    fov_range: f32,
    fov_angle: f32,
    cells: usize,
}

impl Eye {
    pub fn new(fov_range: f32, fov_angle: f32, cells: usize) -> Self {
        Self {
            fov_range,
            fov_angle,
            cells: cells.max(1),
        }
    }

    pub fn cells(&self) -> usize {
        self.cells
    }

    /// Activation per cell, left to right. Rotation follows the screen convention:
    /// 0 looks up, positive turns clockwise.
    pub fn process_vision(&self, position: Vec2, rotation: f32, foods: &[Food]) -> Vec<f32> {
        let mut cells = vec![0.0; self.cells];
        let half_fov = self.fov_angle / 2.0;

        for food in foods {
            let offset = food.position - position;
            let distance = offset.length();
            if distance >= self.fov_range {
                continue;
            }

            // Bearing measured from "up", clockwise.
            let bearing = offset.x.atan2(-offset.y);
            let relative = wrap_angle(bearing - rotation);
            if relative < -half_fov || relative > half_fov {
                continue;
            }

            let cell = ((relative + half_fov) / self.fov_angle * self.cells as f32) as usize;
            let cell = cell.min(self.cells - 1);

            cells[cell] += (self.fov_range - distance) / self.fov_range;
        }

        cells
    }
}

impl Default for Eye {
    fn default() -> Self {
        Self::new(FOV_RANGE, FOV_ANGLE, CELLS)
    }
}

/// Wrap into `[-PI, PI)`.
fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}
