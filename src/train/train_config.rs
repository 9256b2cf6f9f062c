use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::neuron::perceptron::DEFAULT_LEARNING_RATE;

/// Configuration for a `train_with_config` run.
///
/// # Fields
/// - `epochs`        — number of randomly sampled patterns to present; each
///                     epoch is one sample, not a full pass
/// - `learning_rate` — step size of the delta rule
/// - `seed`          — seeds both weight initialization and pattern sampling;
///                     `None` draws from OS entropy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub seed: Option<u64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig { epochs: 100, learning_rate: DEFAULT_LEARNING_RATE, seed: None }
    }
}

impl TrainConfig {
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig { epochs, learning_rate, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(Error::InvalidConfig { reason: "epochs must be at least 1".into() });
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(Error::InvalidConfig {
                reason: format!("learning_rate must be positive and finite, got {}", self.learning_rate),
            });
        }
        Ok(())
    }

    /// Loads and validates a config from JSON. Missing fields take their defaults.
    pub fn load_json(path: &str) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: TrainConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
