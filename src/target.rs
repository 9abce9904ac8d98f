use crate::alphabet;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The phrase a population evolves toward.
///
/// Stored as `char`s so any character is accepted as a literal, including
/// symbols outside [`alphabet::ALPHABET`]. Such a target can never be matched
/// exactly; see [`Target::is_reachable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target(Vec<char>);

impl Target {
    pub fn new(phrase: &str) -> Result<Self, ConfigError> {
        if phrase.is_empty() {
            return Err(ConfigError::EmptyTarget);
        }
        Ok(Self(phrase.chars().collect()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a target built with [`Target::new`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fraction of positions where `genes` agrees with the target.
    ///
    /// Only positions present in both are compared, and the count is divided
    /// by the target length, so the result stays in `[0.0, 1.0]`.
    pub fn score(&self, genes: &[char]) -> f32 {
        let matches = genes.iter().zip(&self.0).filter(|(g, t)| g == t).count();
        matches as f32 / self.0.len() as f32
    }

    pub fn matches(&self, genes: &[char]) -> bool {
        genes == self.0.as_slice()
    }

    /// Whether every symbol of the target can be produced by mutation.
    pub fn is_reachable(&self) -> bool {
        self.0.iter().all(|&c| alphabet::contains(c))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
