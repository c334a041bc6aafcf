//! The simulation loop: collisions, brains, movement, and evolution at the end of
//! every generation.

use crate::animal::{random_position, Animal, AnimalIndividual, Food};
use crate::eye::Eye;
use crate::genetics::{GaussianMutation, GeneticAlgorithm, RouletteWheelSelection, UniformCrossover};
use crate::SimError;
use evo_core::mapper::heading;
use evo_core::{world as view, EngineError, SimulationEngine, WorldSnapshot};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

pub const SPEED_MIN: f32 = 0.001;
pub const SPEED_MAX: f32 = 0.005;
/// An animal eats food closer than this.
const EAT_DISTANCE: f32 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub animals: usize,
    pub foods: usize,
    pub steps_per_generation: usize,
    pub mutation_chance: f32,
    pub mutation_coeff: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            animals: 40,
            foods: 60,
            steps_per_generation: 2500,
            mutation_chance: 0.01,
            mutation_coeff: 0.3,
        }
    }
}

pub struct Simulation {
    rng: StdRng,
    config: SimulationConfig,
    eye: Eye,
    animals: Vec<Animal>,
    foods: Vec<Food>,
    ga: GeneticAlgorithm<RouletteWheelSelection>,
    /// Steps taken in the current generation.
    age: usize,
    generation: u64,
}

impl Simulation {
    /// Random world. Seeded runs are reproducible.
    pub fn random(config: SimulationConfig, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let config = SimulationConfig {
            steps_per_generation: config.steps_per_generation.max(1),
            ..config
        };

        let eye = Eye::default();
        let animals = (0..config.animals)
            .map(|_| Animal::random(&mut rng, &eye))
            .collect();
        let foods = (0..config.foods).map(|_| Food::random(&mut rng)).collect();

        let ga = GeneticAlgorithm::new(
            RouletteWheelSelection,
            UniformCrossover,
            GaussianMutation::new(config.mutation_chance, config.mutation_coeff),
        );

        tracing::info!(
            animals = config.animals,
            foods = config.foods,
            steps_per_generation = config.steps_per_generation,
            "simulation created"
        );

        Self {
            rng,
            config,
            eye,
            animals,
            foods,
            ga,
            age: 0,
            generation: 0,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn age(&self) -> usize {
        self.age
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while the simulation sits on the last step of its generation.
    pub fn is_last_step(&self) -> bool {
        self.age + 1 == self.config.steps_per_generation
    }

    /// Advance one step, evolving when the generation runs out.
    pub fn advance(&mut self) -> Result<(), SimError> {
        self.process_collisions();
        self.process_brains();
        self.process_movement();

        self.age += 1;
        if self.age >= self.config.steps_per_generation {
            self.evolve()?;
        }
        Ok(())
    }

    fn process_collisions(&mut self) {
        for animal in &mut self.animals {
            for food in &mut self.foods {
                if animal.position.distance(food.position) < EAT_DISTANCE {
                    animal.satiation += 1;
                    food.position = random_position(&mut self.rng);
                }
            }
        }
    }

    fn process_brains(&mut self) {
        let eye = &self.eye;
        let foods = &self.foods;

        self.animals.par_iter_mut().for_each(|animal| {
            let vision = eye.process_vision(animal.position, animal.rotation, foods);
            let steering = animal.brain.steer(vision);

            animal.speed = (animal.speed + steering.speed).clamp(SPEED_MIN, SPEED_MAX);
            animal.rotation += steering.rotation;
        });
    }

    fn process_movement(&mut self) {
        for animal in &mut self.animals {
            animal.position += heading(animal.rotation) * animal.speed;
            animal.position.x = wrap_unit(animal.position.x);
            animal.position.y = wrap_unit(animal.position.y);
        }
    }

    fn evolve(&mut self) -> Result<(), SimError> {
        self.age = 0;
        self.generation += 1;

        let population: Vec<_> = self.animals.iter().map(AnimalIndividual::from_animal).collect();
        let offspring = self.ga.evolve(&mut self.rng, &population);

        self.animals = offspring
            .into_iter()
            .map(|individual| individual.into_animal(&self.eye, &mut self.rng))
            .collect::<Result<_, _>>()?;

        for food in &mut self.foods {
            food.position = random_position(&mut self.rng);
        }

        tracing::debug!(generation = self.generation, "population evolved");
        Ok(())
    }

    fn snapshot(&self) -> WorldSnapshot {
        let animals = self
            .animals
            .iter()
            .map(|animal| view::Animal {
                x: animal.position.x,
                y: animal.position.y,
                rotation: animal.rotation,
                speed: animal.speed,
                fitness: animal.fitness(),
            })
            .collect();
        let foods = self
            .foods
            .iter()
            .map(|food| view::Food {
                x: food.position.x,
                y: food.position.y,
            })
            .collect();

        WorldSnapshot::new(animals, foods)
    }
}

/// Wrap into `[0, 1)`. `rem_euclid` can round tiny negatives up to exactly 1.0.
fn wrap_unit(value: f32) -> f32 {
    let wrapped = value.rem_euclid(1.0);
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

impl SimulationEngine for Simulation {
    fn world(&self) -> Result<WorldSnapshot, EngineError> {
        Ok(self.snapshot())
    }

    fn step(&mut self) -> Result<(), EngineError> {
        self.advance().map_err(|e| EngineError::Step {
            reason: e.to_string(),
        })
    }

    fn is_last_step_of_generation(&self) -> bool {
        self.is_last_step()
    }

    fn generation_index(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn config(steps: usize) -> SimulationConfig {
        SimulationConfig {
            animals: 6,
            foods: 8,
            steps_per_generation: steps,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn seeded_runs_are_deterministic() {
        let mut a = Simulation::random(config(50), Some(17));
        let mut b = Simulation::random(config(50), Some(17));
        for _ in 0..30 {
            a.step().unwrap();
            b.step().unwrap();
        }
        assert_eq!(a.world().unwrap(), b.world().unwrap());
    }

    #[test]
    fn boundary_and_generation_counter() {
        let mut sim = Simulation::random(config(3), Some(1));
        assert!(!sim.is_last_step_of_generation());
        sim.step().unwrap();
        sim.step().unwrap();
        assert!(sim.is_last_step_of_generation());
        assert_eq!(sim.generation_index(), 0);

        sim.step().unwrap();
        assert_eq!(sim.generation_index(), 1);
        assert_eq!(sim.age(), 0);
        assert!(!sim.is_last_step_of_generation());
    }

    #[test]
    fn evolution_keeps_population_and_resets_fitness() {
        let mut sim = Simulation::random(config(2), Some(5));
        sim.animals[0].satiation = 4;
        sim.step().unwrap();
        sim.step().unwrap();

        let world = sim.world().unwrap();
        assert_eq!(world.animals().len(), 6);
        assert_eq!(world.foods().len(), 8);
        assert!(world.animals().iter().all(|a| a.fitness == 0.0));
    }

    #[test]
    fn positions_stay_in_unit_square() {
        let mut sim = Simulation::random(config(40), Some(8));
        for _ in 0..100 {
            sim.step().unwrap();
            let world = sim.world().unwrap();
            for animal in world.animals() {
                assert!((0.0..1.0).contains(&animal.x) && (0.0..1.0).contains(&animal.y));
                assert!((SPEED_MIN..=SPEED_MAX).contains(&animal.speed));
            }
        }
    }

    #[test]
    fn eating_raises_fitness_and_moves_food() {
        let mut sim = Simulation::random(config(100), Some(2));
        let spot = Vec2::new(0.3, 0.3);
        sim.animals[0].position = spot;
        sim.foods[0].position = spot;

        sim.process_collisions();

        assert!(sim.animals[0].fitness() >= 1.0);
        assert_ne!(sim.foods[0].position, spot);
    }

    #[test]
    fn empty_population_still_rolls_generations() {
        let mut sim = Simulation::random(
            SimulationConfig {
                animals: 0,
                ..config(2)
            },
            Some(4),
        );
        sim.step().unwrap();
        sim.step().unwrap();
        assert_eq!(sim.generation_index(), 1);
        assert!(sim.world().unwrap().animals().is_empty());
    }

    #[test]
    fn wrap_unit_edges() {
        assert_eq!(wrap_unit(1.0), 0.0);
        assert!((wrap_unit(-0.25) - 0.75).abs() < 1e-6);
        assert!(wrap_unit(-1e-9) < 1.0);
    }

    #[test]
    fn snapshot_is_not_advanced_by_reading() {
        let sim = Simulation::random(config(10), Some(3));
        assert_eq!(sim.world().unwrap(), sim.world().unwrap());
        assert_eq!(sim.age(), 0);
    }
}
