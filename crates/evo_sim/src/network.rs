//! Feed-forward neural network with ReLU activations

use crate::SimError;
use rand::{Rng, RngCore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerTopology {
    pub neurons: usize,
}

#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
}

#[derive(Debug, Clone)]
struct Layer {
    neurons: Vec<Neuron>,
}

#[derive(Debug, Clone)]
struct Neuron {
    bias: f32,
    weights: Vec<f32>,
}

impl Network {
    /// Random weights and biases in `[-1, 1]`.
    pub fn random(rng: &mut dyn RngCore, topology: &[LayerTopology]) -> Self {
        let layers = topology
            .windows(2)
            .map(|pair| Layer {
                neurons: (0..pair[1].neurons)
                    .map(|_| Neuron {
                        bias: rng.gen_range(-1.0..=1.0),
                        weights: (0..pair[0].neurons)
                            .map(|_| rng.gen_range(-1.0..=1.0))
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Self { layers }
    }

    /// Rebuild a network from the flat layout produced by [`Network::weights`].
    pub fn from_weights<I>(topology: &[LayerTopology], weights: I) -> Result<Self, SimError>
    where
        I: IntoIterator<Item = f32>,
    {
        let weights: Vec<f32> = weights.into_iter().collect();
        let expected = Self::weight_count(topology);
        if weights.len() != expected {
            return Err(SimError::GeneCountMismatch {
                expected,
                actual: weights.len(),
            });
        }

        let mut genes = weights.into_iter();
        let layers = topology
            .windows(2)
            .map(|pair| Layer {
                neurons: (0..pair[1].neurons)
                    .map(|_| Neuron {
                        bias: genes.next().unwrap_or_default(),
                        weights: genes.by_ref().take(pair[0].neurons).collect(),
                    })
                    .collect(),
            })
            .collect();

        Ok(Self { layers })
    }

    /// Number of genes needed to describe a network of this shape.
    pub fn weight_count(topology: &[LayerTopology]) -> usize {
        topology
            .windows(2)
            .map(|pair| pair[1].neurons * (pair[0].neurons + 1))
            .sum()
    }

    /// Flat view: per neuron, bias followed by its input weights.
    pub fn weights(&self) -> impl Iterator<Item = f32> + '_ {
        self.layers
            .iter()
            .flat_map(|layer| layer.neurons.iter())
            .flat_map(|neuron| std::iter::once(neuron.bias).chain(neuron.weights.iter().copied()))
    }

    pub fn propagate(&self, inputs: Vec<f32>) -> Vec<f32> {
        self.layers
            .iter()
            .fold(inputs, |inputs, layer| layer.propagate(&inputs))
    }
}

impl Layer {
    fn propagate(&self, inputs: &[f32]) -> Vec<f32> {
        self.neurons
            .iter()
            .map(|neuron| neuron.propagate(inputs))
            .collect()
    }
}

impl Neuron {
    fn propagate(&self, inputs: &[f32]) -> f32 {
        debug_assert_eq!(inputs.len(), self.weights.len());

        let sum: f32 = inputs
            .iter()
            .zip(&self.weights)
            .map(|(input, weight)| input * weight)
            .sum();

        (self.bias + sum).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TOPOLOGY: [LayerTopology; 3] = [
        LayerTopology { neurons: 3 },
        LayerTopology { neurons: 2 },
        LayerTopology { neurons: 1 },
    ];

    #[test]
    fn weights_round_trip() {
        let mut rng = StdRng::seed_from_u64(1);
        let network = Network::random(&mut rng, &TOPOLOGY);
        let weights: Vec<f32> = network.weights().collect();
        assert_eq!(weights.len(), Network::weight_count(&TOPOLOGY));
        assert_eq!(weights.len(), 2 * 4 + 1 * 3);

        let rebuilt = Network::from_weights(&TOPOLOGY, weights.clone()).unwrap();
        assert_eq!(rebuilt.weights().collect::<Vec<_>>(), weights);
    }

    #[test]
    fn wrong_gene_count_is_rejected() {
        let result = Network::from_weights(&TOPOLOGY, vec![0.0; 5]);
        assert_eq!(
            result.unwrap_err(),
            SimError::GeneCountMismatch {
                expected: 11,
                actual: 5
            }
        );
    }

    #[test]
    fn propagate_applies_bias_and_relu() {
        // Hidden: [0.5 + 1*1 + 0 + 0, -1 + 0 + 0 + 0] -> [1.5, 0]
        // Output: 0.0 + 2*1.5 + 3*0 -> 3
        let weights = vec![
            0.5, 1.0, 0.0, 0.0, //
            -1.0, 0.0, 0.0, 0.0, //
            0.0, 2.0, 3.0,
        ];
        let network = Network::from_weights(&TOPOLOGY, weights).unwrap();
        assert_eq!(network.propagate(vec![1.0, 1.0, 1.0]), vec![3.0]);

        let negative = Network::from_weights(&TOPOLOGY, vec![-1.0; 11]).unwrap();
        assert_eq!(negative.propagate(vec![1.0, 1.0, 1.0]), vec![0.0]);
    }
}
