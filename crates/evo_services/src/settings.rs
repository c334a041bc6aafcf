//! Settings management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings from {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Viewer settings. Every section falls back to its defaults when omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub render: RenderSettings,
    pub simulation: SimulationSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

/// Shape sizes are fractions of the viewport's logical width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub agent_size: f32,
    pub food_radius: f32,
    pub background: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Fixed seed for reproducible runs; random when absent.
    pub seed: Option<u64>,
    pub animals: usize,
    pub foods: usize,
    pub steps_per_generation: usize,
    pub mutation_chance: f32,
    pub mutation_coeff: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Evo Viewer".to_string(),
            width: 800,
            height: 800,
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            agent_size: 0.01,
            food_radius: 0.005,
            background: [0.01, 0.01, 0.03],
        }
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            seed: None,
            animals: 40,
            foods: 60,
            steps_per_generation: 2500,
            mutation_chance: 0.01,
            mutation_coeff: 0.3,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(invalid("window", "width and height must be non-zero"));
        }
        if !(self.render.agent_size > 0.0) {
            return Err(invalid("render.agent_size", "must be positive"));
        }
        if !(self.render.food_radius > 0.0) {
            return Err(invalid("render.food_radius", "must be positive"));
        }
        if self.simulation.steps_per_generation == 0 {
            return Err(invalid("simulation.steps_per_generation", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.simulation.mutation_chance) {
            return Err(invalid("simulation.mutation_chance", "must be within 0..=1"));
        }
        if !(self.simulation.mutation_coeff >= 0.0) {
            return Err(invalid("simulation.mutation_coeff", "must not be negative"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> SettingsError {
    SettingsError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
