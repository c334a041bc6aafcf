//! Brains: eye activations in, steering out

use crate::eye::Eye;
use crate::genetics::Chromosome;
use crate::network::{LayerTopology, Network};
use crate::SimError;
use rand::RngCore;
use std::f32::consts::FRAC_PI_2;

/// Largest speed change per step.
pub const SPEED_ACCEL: f32 = 0.2;
/// Largest rotation change per step.
pub const ROTATION_ACCEL: f32 = FRAC_PI_2;

#[derive(Debug, Clone)]
pub struct Brain {
    network: Network,
}

/// Clamped deltas decided for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    pub speed: f32,
    pub rotation: f32,
}

impl Brain {
    pub fn random(rng: &mut dyn RngCore, eye: &Eye) -> Self {
        Self {
            network: Network::random(rng, &Self::topology(eye)),
        }
    }

    pub fn from_chromosome(chromosome: Chromosome, eye: &Eye) -> Result<Self, SimError> {
        Ok(Self {
            network: Network::from_weights(&Self::topology(eye), chromosome)?,
        })
    }

    pub fn as_chromosome(&self) -> Chromosome {
        self.network.weights().collect()
    }

    pub fn steer(&self, vision: Vec<f32>) -> Steering {
        let response = self.network.propagate(vision);
        let output = |i: usize| response.get(i).copied().unwrap_or(0.0);

        Steering {
            speed: output(0).clamp(-SPEED_ACCEL, SPEED_ACCEL),
            rotation: output(1).clamp(-ROTATION_ACCEL, ROTATION_ACCEL),
        }
    }

    fn topology(eye: &Eye) -> [LayerTopology; 3] {
        [
            LayerTopology {
                neurons: eye.cells(),
            },
            LayerTopology {
                neurons: 2 * eye.cells(),
            },
            LayerTopology { neurons: 2 },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn chromosome_round_trip() {
        let eye = Eye::default();
        let mut rng = StdRng::seed_from_u64(9);
        let brain = Brain::random(&mut rng, &eye);

        let chromosome = brain.as_chromosome();
        let rebuilt = Brain::from_chromosome(chromosome.clone(), &eye).unwrap();
        assert_eq!(rebuilt.as_chromosome(), chromosome);
    }

    #[test]
    fn mismatched_eye_is_an_error() {
        let mut rng = StdRng::seed_from_u64(9);
        let brain = Brain::random(&mut rng, &Eye::default());
        let narrow = Eye::new(0.25, 1.0, 3);
        assert!(Brain::from_chromosome(brain.as_chromosome(), &narrow).is_err());
    }

    #[test]
    fn steering_is_clamped() {
        let eye = Eye::new(0.25, 1.0, 1);
        // One input, two hidden, two outputs; every weight and bias is 10.
        let chromosome: Chromosome = std::iter::repeat(10.0).take(2 * 2 + 2 * 3).collect();
        let brain = Brain::from_chromosome(chromosome, &eye).unwrap();

        let steering = brain.steer(vec![1.0]);
        assert_eq!(steering.speed, SPEED_ACCEL);
        assert_eq!(steering.rotation, ROTATION_ACCEL);
    }
}
