//! Genetic algorithm: selection, crossover and mutation over flat chromosomes

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    genes: Vec<f32>,
}

impl Chromosome {
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f32> {
        self.genes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut f32> {
        self.genes.iter_mut()
    }
}

impl FromIterator<f32> for Chromosome {
    fn from_iter<T: IntoIterator<Item = f32>>(iter: T) -> Self {
        Self {
            genes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Chromosome {
    type Item = f32;
    type IntoIter = std::vec::IntoIter<f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.into_iter()
    }
}

pub trait Individual {
    fn create(chromosome: Chromosome) -> Self;
    fn chromosome(&self) -> &Chromosome;
    fn fitness(&self) -> f32;
}

pub trait SelectionMethod {
    /// Pick a parent. `None` only for an empty population.
    fn select<'a, I>(&self, rng: &mut dyn RngCore, population: &'a [I]) -> Option<&'a I>
    where
        I: Individual;
}

pub trait CrossoverMethod {
    fn crossover(
        &self,
        rng: &mut dyn RngCore,
        parent_a: &Chromosome,
        parent_b: &Chromosome,
    ) -> Chromosome;
}

pub trait MutationMethod {
    fn mutate(&self, rng: &mut dyn RngCore, child: &mut Chromosome);
}

/// Fitness-proportionate selection. Falls back to a uniform pick when nobody
/// scored, so a barren generation still breeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouletteWheelSelection;

impl SelectionMethod for RouletteWheelSelection {
    fn select<'a, I>(&self, rng: &mut dyn RngCore, population: &'a [I]) -> Option<&'a I>
    where
        I: Individual,
    {
        population
            .choose_weighted(rng, |individual| individual.fitness().max(0.0))
            .ok()
            .or_else(|| population.choose(rng))
    }
}

/// Each gene comes from either parent with equal probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCrossover;

impl CrossoverMethod for UniformCrossover {
    fn crossover(
        &self,
        rng: &mut dyn RngCore,
        parent_a: &Chromosome,
        parent_b: &Chromosome,
    ) -> Chromosome {
        debug_assert_eq!(parent_a.len(), parent_b.len());

        parent_a
            .iter()
            .zip(parent_b.iter())
            .map(|(&a, &b)| if rng.gen_bool(0.5) { a } else { b })
            .collect()
    }
}

/// With probability `chance`, nudge a gene by up to `coeff` in a random direction.
#[derive(Debug, Clone, Copy)]
pub struct GaussianMutation {
    chance: f32,
    coeff: f32,
}

impl GaussianMutation {
    pub fn new(chance: f32, coeff: f32) -> Self {
        Self {
            chance: chance.clamp(0.0, 1.0),
            coeff,
        }
    }
}

impl MutationMethod for GaussianMutation {
    fn mutate(&self, rng: &mut dyn RngCore, child: &mut Chromosome) {
        for gene in child.iter_mut() {
            if rng.gen_bool(self.chance as f64) {
                let sign = if rng.gen_bool(0.5) { -1.0 } else { 1.0 };
                *gene += sign * self.coeff * rng.gen::<f32>();
            }
        }
    }
}

pub struct GeneticAlgorithm<S> {
    selection: S,
    crossover: Box<dyn CrossoverMethod + Send + Sync>,
    mutation: Box<dyn MutationMethod + Send + Sync>,
}

impl<S: SelectionMethod> GeneticAlgorithm<S> {
    pub fn new(
        selection: S,
        crossover: impl CrossoverMethod + Send + Sync + 'static,
        mutation: impl MutationMethod + Send + Sync + 'static,
    ) -> Self {
        Self {
            selection,
            crossover: Box::new(crossover),
            mutation: Box::new(mutation),
        }
    }

    /// Breed a population of the same size. An empty population stays empty.
    pub fn evolve<I>(&self, rng: &mut dyn RngCore, population: &[I]) -> Vec<I>
    where
        I: Individual,
    {
        let mut offspring = Vec::with_capacity(population.len());

        for _ in 0..population.len() {
            let (Some(parent_a), Some(parent_b)) = (
                self.selection.select(rng, population),
                self.selection.select(rng, population),
            ) else {
                break;
            };

            let mut child =
                self.crossover
                    .crossover(rng, parent_a.chromosome(), parent_b.chromosome());
            self.mutation.mutate(rng, &mut child);
            offspring.push(I::create(child));
        }

        offspring
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, Clone, PartialEq)]
    struct TestIndividual {
        chromosome: Chromosome,
        fitness: f32,
    }

    impl TestIndividual {
        fn new(genes: &[f32], fitness: f32) -> Self {
            Self {
                chromosome: genes.iter().copied().collect(),
                fitness,
            }
        }
    }

    impl Individual for TestIndividual {
        fn create(chromosome: Chromosome) -> Self {
            Self {
                chromosome,
                fitness: 0.0,
            }
        }

        fn chromosome(&self) -> &Chromosome {
            &self.chromosome
        }

        fn fitness(&self) -> f32 {
            self.fitness
        }
    }

    #[test]
    fn roulette_prefers_fitter() {
        let mut rng = StdRng::seed_from_u64(42);
        let population = vec![
            TestIndividual::new(&[1.0], 1.0),
            TestIndividual::new(&[2.0], 9.0),
        ];

        let picks_of_fit = (0..1000)
            .filter(|_| {
                RouletteWheelSelection
                    .select(&mut rng, &population)
                    .map(|i| i.fitness == 9.0)
                    .unwrap_or(false)
            })
            .count();

        assert!(picks_of_fit > 800, "fit individual picked {picks_of_fit} times");
    }

    #[test]
    fn roulette_zero_fitness_still_selects() {
        let mut rng = StdRng::seed_from_u64(3);
        let population = vec![TestIndividual::new(&[1.0], 0.0); 4];
        assert!(RouletteWheelSelection.select(&mut rng, &population).is_some());
    }

    #[test]
    fn roulette_empty_population() {
        let mut rng = StdRng::seed_from_u64(3);
        let population: Vec<TestIndividual> = Vec::new();
        assert!(RouletteWheelSelection.select(&mut rng, &population).is_none());
    }

    #[test]
    fn uniform_crossover_mixes_parents() {
        let mut rng = StdRng::seed_from_u64(7);
        let a: Chromosome = (0..100).map(|_| 1.0).collect();
        let b: Chromosome = (0..100).map(|_| -1.0).collect();

        let child = UniformCrossover.crossover(&mut rng, &a, &b);
        let from_a = child.iter().filter(|&&g| g == 1.0).count();
        let from_b = child.iter().filter(|&&g| g == -1.0).count();

        assert_eq!(from_a + from_b, 100);
        assert!(from_a > 30 && from_b > 30);
    }

    #[test]
    fn zero_chance_never_mutates() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut child: Chromosome = vec![0.5, -0.5, 2.0].into_iter().collect();
        GaussianMutation::new(0.0, 10.0).mutate(&mut rng, &mut child);
        assert_eq!(child.into_iter().collect::<Vec<_>>(), vec![0.5, -0.5, 2.0]);
    }

    #[test]
    fn full_chance_stays_within_coeff() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut child: Chromosome = vec![0.0; 50].into_iter().collect();
        GaussianMutation::new(1.0, 0.5).mutate(&mut rng, &mut child);
        assert!(child.iter().all(|g| g.abs() <= 0.5));
        assert!(child.iter().any(|&g| g != 0.0));
    }

    #[test]
    fn evolve_keeps_population_size() {
        let mut rng = StdRng::seed_from_u64(5);
        let ga = GeneticAlgorithm::new(
            RouletteWheelSelection,
            UniformCrossover,
            GaussianMutation::new(0.5, 0.5),
        );
        let population = vec![
            TestIndividual::new(&[0.0, 0.0, 0.0], 1.0),
            TestIndividual::new(&[1.0, 1.0, 1.0], 2.0),
            TestIndividual::new(&[2.0, 2.0, 2.0], 3.0),
        ];

        let offspring = ga.evolve(&mut rng, &population);
        assert_eq!(offspring.len(), 3);
        assert!(offspring.iter().all(|i| i.chromosome.len() == 3));

        assert!(ga.evolve::<TestIndividual>(&mut rng, &[]).is_empty());
    }
}
