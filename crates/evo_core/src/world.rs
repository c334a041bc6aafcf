//! World snapshots
//!
//! A snapshot is a read of the simulation at one instant. It is built once by the
//! engine and never mutated afterwards; consumers only get shared slices.

use glam::Vec2;

/// A simulated agent as seen by the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animal {
    /// Simulation-space position, origin top-left.
    pub x: f32,
    pub y: f32,
    /// Heading in radians; 0 faces up (decreasing y).
    pub rotation: f32,
    pub speed: f32,
    /// Non-negative; only meaningful at generation boundaries.
    pub fitness: f32,
}

impl Animal {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// A resource an animal can eat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Food {
    pub x: f32,
    pub y: f32,
}

impl Food {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Immutable view of the world at one simulation tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldSnapshot {
    animals: Vec<Animal>,
    foods: Vec<Food>,
}

impl WorldSnapshot {
    pub fn new(animals: Vec<Animal>, foods: Vec<Food>) -> Self {
        Self { animals, foods }
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }
}
