//! Evo Simulation
//!
//! A small evolutionary world: animals with eyes and feed-forward brains chase food,
//! and every generation a genetic algorithm breeds the next population from the
//! best eaters. [`Simulation`] implements [`evo_core::SimulationEngine`].

pub mod animal;
pub mod brain;
pub mod eye;
pub mod genetics;
pub mod network;
pub mod simulation;

pub use simulation::{Simulation, SimulationConfig};

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("chromosome has {actual} genes but the network needs {expected}")]
    GeneCountMismatch { expected: usize, actual: usize },
}
