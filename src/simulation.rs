//! Synchronous driver loop around an [`Evolver`].
//!
//! The driver owns no clock. A host that wants to animate the run calls
//! [`Evolver::step`] itself at its own cadence; [`Simulation::run`] is for
//! hosts that just want the result, optionally watching each generation.

use crate::Evolver;
use crate::stats::Stats;
use tracing::info;

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The best candidate matched the target. Holds the final snapshot.
    Converged(Stats),
    /// The generation cap was hit first. Holds the last snapshot.
    Exhausted(Stats),
}

impl Outcome {
    pub fn stats(&self) -> &Stats {
        match self {
            Outcome::Converged(stats) | Outcome::Exhausted(stats) => stats,
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, Outcome::Converged(_))
    }
}

pub struct Simulation<E: Evolver> {
    engine: E,
    max_generations: Option<u64>,
}

impl<E: Evolver> Simulation<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            max_generations: None,
        }
    }

    /// Stops after `max` steps if the target has not been matched by then.
    /// At least one step always runs.
    pub fn with_max_generations(mut self, max: u64) -> Self {
        self.max_generations = Some(max);
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_inner(self) -> E {
        self.engine
    }

    /// Steps until the engine finishes or the cap is reached, handing every
    /// snapshot to `on_generation`.
    ///
    /// Without a cap and with an unreachable target this never returns.
    pub fn run<F: FnMut(&Stats)>(&mut self, mut on_generation: F) -> Outcome {
        let mut steps: u64 = 0;
        loop {
            let stats = self.engine.step();
            on_generation(&stats);
            steps += 1;

            if self.engine.is_finished() {
                info!(
                    generation = stats.generation,
                    best = %stats.best,
                    "simulation converged"
                );
                return Outcome::Converged(stats);
            }
            if self.max_generations.is_some_and(|max| steps >= max) {
                info!(
                    generation = stats.generation,
                    highest_fitness = stats.highest_fitness,
                    "simulation stopped at generation cap"
                );
                return Outcome::Exhausted(stats);
            }
        }
    }
}
