//! Animals, food, and the genetic view of an animal

use crate::brain::Brain;
use crate::eye::Eye;
use crate::genetics::{Chromosome, Individual};
use crate::SimError;
use glam::Vec2;
use rand::{Rng, RngCore};
use std::f32::consts::TAU;

/// Speed every animal is born with.
const INITIAL_SPEED: f32 = 0.002;

#[derive(Debug, Clone)]
pub struct Animal {
    pub(crate) position: Vec2,
    pub(crate) rotation: f32,
    pub(crate) speed: f32,
    pub(crate) brain: Brain,
    /// Foods eaten this generation.
    pub(crate) satiation: usize,
}

impl Animal {
    pub fn random(rng: &mut dyn RngCore, eye: &Eye) -> Self {
        let brain = Brain::random(rng, eye);
        Self::new(brain, rng)
    }

    pub(crate) fn from_chromosome(
        chromosome: Chromosome,
        eye: &Eye,
        rng: &mut dyn RngCore,
    ) -> Result<Self, SimError> {
        let brain = Brain::from_chromosome(chromosome, eye)?;
        Ok(Self::new(brain, rng))
    }

    fn new(brain: Brain, rng: &mut dyn RngCore) -> Self {
        Self {
            position: random_position(rng),
            rotation: rng.gen_range(0.0..TAU),
            speed: INITIAL_SPEED,
            brain,
            satiation: 0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn fitness(&self) -> f32 {
        self.satiation as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Food {
    pub(crate) position: Vec2,
}

impl Food {
    pub fn random(rng: &mut dyn RngCore) -> Self {
        Self {
            position: random_position(rng),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }
}

pub(crate) fn random_position(rng: &mut dyn RngCore) -> Vec2 {
    Vec2::new(rng.gen(), rng.gen())
}

/// An animal reduced to what the genetic algorithm needs.
pub(crate) struct AnimalIndividual {
    fitness: f32,
    chromosome: Chromosome,
}

impl AnimalIndividual {
    pub(crate) fn from_animal(animal: &Animal) -> Self {
        Self {
            fitness: animal.fitness(),
            chromosome: animal.brain.as_chromosome(),
        }
    }

    pub(crate) fn into_animal(self, eye: &Eye, rng: &mut dyn RngCore) -> Result<Animal, SimError> {
        Animal::from_chromosome(self.chromosome, eye, rng)
    }
}

impl Individual for AnimalIndividual {
    fn create(chromosome: Chromosome) -> Self {
        Self {
            fitness: 0.0,
            chromosome,
        }
    }

    fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    fn fitness(&self) -> f32 {
        self.fitness
    }
}
