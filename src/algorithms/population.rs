//! The phrase-guessing genetic algorithm.
//!
//! A [`Population`] holds a fixed number of [`Candidate`]s and evolves them
//! toward a [`Target`] phrase. One generation goes through four phases:
//!
//! 1. [`calculate_fitness`](Population::calculate_fitness) scores every
//!    candidate as the fraction of positions matching the target
//! 2. [`evaluate`](Population::evaluate) sorts best-first and marks the run
//!    finished once the best candidate spells the target exactly
//! 3. [`stats`](Population::stats) snapshots the scored generation
//! 4. [`reproduce`](Population::reproduce) breeds the next generation from a
//!    [`MatingPool`] with single-point crossover and per-gene mutation
//!
//! [`Evolver::step`] runs all four in order. Once finished, every further
//! step is a no-op that returns the final snapshot.
//!
//! # Empty mating pool
//!
//! If every candidate scores zero the mating pool has no entries. The next
//! generation is then reseeded with fresh random candidates instead of
//! selecting parents.
//!
//! # Determinism
//!
//! All randomness comes from a [`Pcg64`] owned by the population. Two
//! populations built with the same arguments and seed evolve identically, and
//! a serialized population resumes exactly where it stopped.

use crate::algorithms::mating_pool::{self, MatingPool};
use crate::candidate::Candidate;
use crate::config::{self, EvolutionConfig};
use crate::error::ConfigError;
use crate::stats::{self, Stats};
use crate::target::Target;
use crate::{Evolver, Genotype};
use rand::prelude::SeedableRng;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PopulationState")]
pub struct Population {
    candidates: Vec<Candidate>,
    target: Target,
    pop_size: usize,
    mutation_rate: f32,
    generation: u64,
    finished: bool,
    rng: Pcg64,
}

impl Population {
    /// Creates `pop_size` random candidates of `target`'s length.
    pub fn new(
        target: &str,
        pop_size: usize,
        mutation_rate: f32,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::with_rng(
            Target::new(target)?,
            pop_size,
            mutation_rate,
            Pcg64::seed_from_u64(seed),
        )
    }

    /// Builds a population from a validated configuration, seeding from the
    /// thread-local generator when no seed is configured.
    pub fn from_config(config: &EvolutionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => Pcg64::seed_from_u64(seed),
            None => Pcg64::from_rng(&mut rand::rng()),
        };
        Self::with_rng(
            Target::new(&config.target)?,
            config.pop_size,
            config.mutation_rate,
            rng,
        )
    }

    /// Starts from caller-supplied candidates instead of random ones.
    ///
    /// Every candidate must have exactly as many genes as the target has
    /// characters. Stored fitness values are kept until the next
    /// [`calculate_fitness`](Self::calculate_fitness).
    pub fn from_candidates(
        target: &str,
        candidates: Vec<Candidate>,
        mutation_rate: f32,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let target = Target::new(target)?;
        config::validate_parameters(candidates.len(), mutation_rate)?;
        check_gene_lengths(&target, &candidates)?;
        Ok(Self {
            pop_size: candidates.len(),
            candidates,
            target,
            mutation_rate,
            generation: 0,
            finished: false,
            rng: Pcg64::seed_from_u64(seed),
        })
    }

    fn with_rng(
        target: Target,
        pop_size: usize,
        mutation_rate: f32,
        mut rng: Pcg64,
    ) -> Result<Self, ConfigError> {
        config::validate_parameters(pop_size, mutation_rate)?;
        if !target.is_reachable() {
            warn!(%target, "target contains symbols outside the alphabet and cannot converge");
        }
        let candidates = (0..pop_size)
            .map(|_| Candidate::random(&mut rng, target.len()))
            .collect();
        Ok(Self {
            candidates,
            target,
            pop_size,
            mutation_rate,
            generation: 0,
            finished: false,
            rng,
        })
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn pop_size(&self) -> usize {
        self.pop_size
    }

    pub fn mutation_rate(&self) -> f32 {
        self.mutation_rate
    }

    /// Number of completed reproductions.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Rank 0 of the population. Only meaningful after [`evaluate`](Self::evaluate).
    pub fn best(&self) -> &Candidate {
        &self.candidates[0]
    }

    /// Scores every candidate against the target.
    pub fn calculate_fitness(&mut self) {
        let target = &self.target;

        #[cfg(feature = "parallel")]
        self.candidates.par_iter_mut().for_each(|c| {
            c.calculate_fitness(target);
        });
        #[cfg(not(feature = "parallel"))]
        for c in &mut self.candidates {
            c.calculate_fitness(target);
        }
    }

    /// Sorts best-first and latches `finished` on an exact match.
    pub fn evaluate(&mut self) {
        self.candidates.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));

        if !self.finished && self.target.matches(&self.candidates[0].genes) {
            self.finished = true;
            info!(
                generation = self.generation,
                target = %self.target,
                "target phrase matched"
            );
        }
    }

    /// Snapshot of the population as last scored.
    pub fn stats(&self) -> Stats {
        let best = self.best().clone();
        Stats {
            highest_fitness: best.fitness,
            best,
            generation: self.generation,
            pop_size: self.pop_size,
            average_fitness: stats::average_fitness(&self.candidates),
        }
    }

    /// Replaces the population with `pop_size` children and advances the
    /// generation counter. Does nothing once finished.
    pub fn reproduce(&mut self) {
        if self.finished {
            return;
        }

        let pool = MatingPool::build(&self.candidates);
        let len = self.target.len();

        let next_gen = if pool.is_empty() {
            warn!(
                generation = self.generation,
                "every candidate scored zero, reseeding the generation"
            );
            (0..self.pop_size)
                .map(|_| Candidate::random(&mut self.rng, len))
                .collect()
        } else {
            debug!(
                generation = self.generation,
                highest_fitness = mating_pool::highest_fitness(&self.candidates),
                pool_size = pool.len(),
                "built mating pool"
            );
            let mut next_gen = Vec::with_capacity(self.pop_size);
            while next_gen.len() < self.pop_size {
                let Some((a, b)) = pool.pick_parents(&mut self.rng) else {
                    break;
                };
                let mut child = self.candidates[a].crossover(&self.candidates[b], &mut self.rng);
                child.mutate(&mut self.rng, self.mutation_rate);
                next_gen.push(child);
            }
            next_gen
        };

        self.candidates = next_gen;
        self.generation += 1;
    }
}

/// Wire form of a [`Population`]. Deserialization goes through here so a
/// checkpoint is held to the same invariants as the constructors.
#[derive(Deserialize)]
struct PopulationState {
    candidates: Vec<Candidate>,
    target: Target,
    pop_size: usize,
    mutation_rate: f32,
    generation: u64,
    finished: bool,
    rng: Pcg64,
}

impl TryFrom<PopulationState> for Population {
    type Error = ConfigError;

    fn try_from(state: PopulationState) -> Result<Self, Self::Error> {
        if state.target.is_empty() {
            return Err(ConfigError::EmptyTarget);
        }
        config::validate_parameters(state.candidates.len(), state.mutation_rate)?;
        if state.pop_size != state.candidates.len() {
            return Err(ConfigError::PopulationSizeMismatch {
                expected: state.pop_size,
                found: state.candidates.len(),
            });
        }
        check_gene_lengths(&state.target, &state.candidates)?;
        Ok(Self {
            candidates: state.candidates,
            target: state.target,
            pop_size: state.pop_size,
            mutation_rate: state.mutation_rate,
            generation: state.generation,
            finished: state.finished,
            rng: state.rng,
        })
    }
}

fn check_gene_lengths(target: &Target, candidates: &[Candidate]) -> Result<(), ConfigError> {
    match candidates.iter().find(|c| c.genes.len() != target.len()) {
        Some(bad) => Err(ConfigError::GeneLengthMismatch {
            expected: target.len(),
            found: bad.genes.len(),
        }),
        None => Ok(()),
    }
}

impl Evolver for Population {
    fn step(&mut self) -> Stats {
        if self.finished {
            return self.stats();
        }

        self.calculate_fitness();
        self.evaluate();
        let stats = self.stats();
        debug!(
            generation = stats.generation,
            best = %stats.best,
            highest_fitness = stats.highest_fitness,
            average_fitness = stats.average_fitness,
            "generation scored"
        );
        self.reproduce();
        stats
    }

    fn population(&self) -> &[Candidate] {
        &self.candidates
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}
