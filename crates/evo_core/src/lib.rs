//! Evo Core
//!
//! Contracts shared between the simulation and the viewer:
//! - World snapshots (animals and foods)
//! - The simulation engine capability set
//! - Mapping from simulation space to logical pixels
//! - Per-generation fitness statistics

pub mod engine;
pub mod mapper;
pub mod stats;
pub mod world;

pub use glam;

pub use engine::{EngineError, SimulationEngine};
pub use mapper::CoordinateMapper;
pub use stats::{FitnessSummary, StatsError};
pub use world::{Animal, Food, WorldSnapshot};

/// Viewer version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
