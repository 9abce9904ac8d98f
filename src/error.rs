use thiserror::Error;

/// Rejected engine configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("target phrase must not be empty")]
    EmptyTarget,

    #[error("population size must be at least 1")]
    EmptyPopulation,

    /// Mutation rate outside `[0.0, 1.0]`, or NaN.
    #[error("mutation rate must be within [0.0, 1.0], got {0}")]
    InvalidMutationRate(f32),

    #[error("candidate has {found} genes but the target has {expected}")]
    GeneLengthMismatch { expected: usize, found: usize },

    #[error("population size is {expected} but {found} candidates are present")]
    PopulationSizeMismatch { expected: usize, found: usize },
}
