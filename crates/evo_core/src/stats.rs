//! Generation fitness statistics

use crate::world::WorldSnapshot;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("cannot summarize fitness of an empty population")]
    EmptyPopulation,
}

/// Fitness aggregate over one snapshot's animals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessSummary {
    pub average: f32,
    pub max: f32,
    pub population: usize,
}

/// Summarize the animals of a snapshot.
///
/// An empty population is reported as [`StatsError::EmptyPopulation`] instead of a
/// NaN average.
pub fn summarize(world: &WorldSnapshot) -> Result<FitnessSummary, StatsError> {
    summarize_fitness(world.animals().iter().map(|animal| animal.fitness))
}

/// Single pass over raw fitness values. The running max starts at zero since
/// fitness is never negative.
pub fn summarize_fitness<I>(values: I) -> Result<FitnessSummary, StatsError>
where
    I: IntoIterator<Item = f32>,
{
    let mut count = 0usize;
    let mut sum = 0.0f32;
    let mut max = 0.0f32;

    for fitness in values {
        count += 1;
        sum += fitness;
        max = max.max(fitness);
    }

    if count == 0 {
        return Err(StatsError::EmptyPopulation);
    }

    Ok(FitnessSummary {
        average: sum / count as f32,
        max,
        population: count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Animal, Food};

    fn animal(fitness: f32) -> Animal {
        Animal {
            x: 0.5,
            y: 0.5,
            rotation: 0.0,
            speed: 0.002,
            fitness,
        }
    }

    #[test]
    fn average_and_max() {
        let summary = summarize_fitness([2.0, 5.0, 3.0]).unwrap();
        assert!((summary.average - 10.0 / 3.0).abs() < 1e-6);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.population, 3);
    }

    #[test]
    fn empty_population_is_an_error() {
        assert_eq!(
            summarize(&WorldSnapshot::default()),
            Err(StatsError::EmptyPopulation)
        );
    }

    #[test]
    fn foods_do_not_count() {
        let world = WorldSnapshot::new(
            vec![animal(4.0), animal(8.0)],
            vec![Food { x: 0.1, y: 0.1 }; 5],
        );
        let summary = summarize(&world).unwrap();
        assert_eq!(summary.average, 6.0);
        assert_eq!(summary.max, 8.0);
        assert_eq!(summary.population, 2);
    }

    #[test]
    fn all_zero_fitness() {
        let summary = summarize_fitness([0.0, 0.0]).unwrap();
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.max, 0.0);
    }
}
