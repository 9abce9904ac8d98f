//! Run configuration.
//!
//! Every field except `target` has a default, so a configuration can be
//! deserialized from a document that names only the phrase.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_POP_SIZE: usize = 100;
pub const DEFAULT_MUTATION_RATE: f32 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Phrase to evolve toward.
    pub target: String,
    /// Candidates per generation.
    pub pop_size: usize,
    /// Per-gene replacement probability.
    pub mutation_rate: f32,
    /// RNG seed. `None` seeds from the thread-local generator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            target: String::new(),
            pop_size: DEFAULT_POP_SIZE,
            mutation_rate: DEFAULT_MUTATION_RATE,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    pub fn with_pop_size(mut self, pop_size: usize) -> Self {
        self.pop_size = pop_size;
        self
    }

    pub fn with_mutation_rate(mut self, mutation_rate: f32) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target.is_empty() {
            return Err(ConfigError::EmptyTarget);
        }
        validate_parameters(self.pop_size, self.mutation_rate)
    }
}

pub(crate) fn validate_parameters(pop_size: usize, mutation_rate: f32) -> Result<(), ConfigError> {
    if pop_size == 0 {
        return Err(ConfigError::EmptyPopulation);
    }
    // NaN fails the range check.
    if !(0.0..=1.0).contains(&mutation_rate) {
        return Err(ConfigError::InvalidMutationRate(mutation_rate));
    }
    Ok(())
}
