//! A step-driven genetic algorithm that evolves random strings toward a
//! target phrase.
//!
//! The engine ([`algorithms::population::Population`]) scores candidates by
//! the fraction of positions matching the target, breeds the next generation
//! from a fitness-weighted mating pool with single-point crossover, and
//! mutates each gene with a fixed probability. The host calls
//! [`Evolver::step`] at whatever cadence it likes (an animation frame, a
//! benchmark loop, a terminal demo) until [`Evolver::is_finished`] reports
//! convergence.
//!
//! ```rust
//! use phrase_genetics::{Evolver, algorithms::population::Population};
//!
//! let mut population = Population::new("go", 200, 0.05, 42).unwrap();
//! while !population.is_finished() && population.generation() < 500 {
//!     let stats = population.step();
//!     println!("{} {:.2}", stats.best, stats.highest_fitness);
//! }
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

pub mod alphabet;
pub mod candidate;
pub mod config;
pub mod error;
pub mod simulation;
pub mod stats;
pub mod target;

pub mod algorithms {
    pub mod mating_pool;
    pub mod population;
}

pub use candidate::Candidate;
pub use config::EvolutionConfig;
pub use error::ConfigError;
pub use stats::Stats;
pub use target::Target;

/// The 'DNA' of an individual.
/// Defined by how it changes, not what it does.
pub trait Genotype: Clone + Serialize + for<'de> Deserialize<'de> + Send + Sync {
    fn mutate<R: Rng>(&mut self, rng: &mut R, rate: f32);
    fn crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> Self;

    /// Distance metric for diversity tracking.
    fn distance(&self, other: &Self) -> f32;
}

/// The master engine trait.
///
/// One call to [`step`](Evolver::step) scores the current generation, reports
/// it, and breeds the next one unless the run has already converged.
pub trait Evolver {
    fn step(&mut self) -> Stats;
    fn population(&self) -> &[Candidate];
    fn is_finished(&self) -> bool;
}
