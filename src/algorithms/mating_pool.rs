//! Fitness-proportionate parent selection by discrete replication.
//!
//! Each candidate is entered into the pool a number of times proportional to
//! its fitness relative to the best of the generation:
//!
//! ```text
//! entries = floor(fitness / highest_fitness * 100)
//! ```
//!
//! The best candidate therefore gets exactly [`MAX_ENTRIES`] slots and a
//! candidate scoring zero gets none. Parents are then drawn uniformly, with
//! replacement, from the pool.
//!
//! The pool stores indices into the scored population rather than copies.

use crate::candidate::Candidate;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Entries contributed by a candidate whose fitness equals the generation's
/// highest.
pub const MAX_ENTRIES: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatingPool {
    entries: Vec<usize>,
}

impl MatingPool {
    pub fn build(candidates: &[Candidate]) -> Self {
        let highest = highest_fitness(candidates);
        let mut entries = Vec::new();
        for (index, candidate) in candidates.iter().enumerate() {
            let count = entry_count(candidate.fitness, highest);
            entries.extend(std::iter::repeat_n(index, count));
        }
        Self { entries }
    }

    /// Pool size, counting duplicates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when every candidate scored zero.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many times `index` appears in the pool.
    pub fn entries_for(&self, index: usize) -> usize {
        self.entries.iter().filter(|&&i| i == index).count()
    }

    /// Draws two parent indices uniformly with replacement.
    ///
    /// Returns `None` when the pool is empty; the caller decides the fallback.
    pub fn pick_parents<R: Rng>(&self, rng: &mut R) -> Option<(usize, usize)> {
        let first = *self.entries.choose(rng)?;
        let second = *self.entries.choose(rng)?;
        Some((first, second))
    }
}

/// Maximum fitness over the population, folding from zero.
pub fn highest_fitness(candidates: &[Candidate]) -> f32 {
    candidates
        .iter()
        .fold(0.0_f32, |max, c| if c.fitness > max { c.fitness } else { max })
}

/// Linear map of `fitness` from `[0, highest]` onto `[0, MAX_ENTRIES]`,
/// rounded down.
pub fn entry_count(fitness: f32, highest: f32) -> usize {
    if fitness <= 0.0 || highest <= 0.0 {
        return 0;
    }
    let normalized = fitness / highest;
    (normalized * MAX_ENTRIES as f32).floor() as usize
}
