//! Simulation engine capability set
//!
//! The viewer never looks inside the engine. Anything that can hand out snapshots,
//! advance by one tick and answer the two generation questions can be driven.

use crate::world::WorldSnapshot;
use thiserror::Error;

/// Faults raised by an engine. The viewer treats every one of them as fatal.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine failed to produce a world snapshot: {reason}")]
    Snapshot { reason: String },

    #[error("engine failed to advance: {reason}")]
    Step { reason: String },
}

pub trait SimulationEngine {
    /// Read the current state. Must not advance the engine.
    fn world(&self) -> Result<WorldSnapshot, EngineError>;

    /// Advance internal state by one tick.
    fn step(&mut self) -> Result<(), EngineError>;

    /// True when the current (pre-step) tick is the last one of its generation.
    fn is_last_step_of_generation(&self) -> bool;

    /// Current generation counter. Non-decreasing, bumped exactly at boundaries.
    fn generation_index(&self) -> u64;
}

impl<E: SimulationEngine + ?Sized> SimulationEngine for Box<E> {
    fn world(&self) -> Result<WorldSnapshot, EngineError> {
        (**self).world()
    }

    fn step(&mut self) -> Result<(), EngineError> {
        (**self).step()
    }

    fn is_last_step_of_generation(&self) -> bool {
        (**self).is_last_step_of_generation()
    }

    fn generation_index(&self) -> u64 {
        (**self).generation_index()
    }
}
