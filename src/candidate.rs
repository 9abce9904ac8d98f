//! A single gene string and its score.

use crate::Genotype;
use crate::alphabet;
use crate::target::Target;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One member of a population.
///
/// `genes.len()` always equals the length of the target it is evolved
/// against. `fitness` is whatever the last call to
/// [`calculate_fitness`](Candidate::calculate_fitness) produced, or `0.0` for
/// a fresh candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub genes: Vec<char>,
    pub fitness: f32,
}

impl Candidate {
    pub fn new(genes: Vec<char>) -> Self {
        Self {
            genes,
            fitness: 0.0,
        }
    }

    /// A candidate of `len` genes sampled uniformly from the alphabet.
    pub fn random<R: Rng>(rng: &mut R, len: usize) -> Self {
        Self::new(alphabet::random_genes(rng, len))
    }

    pub fn calculate_fitness(&mut self, target: &Target) -> f32 {
        self.fitness = target.score(&self.genes);
        self.fitness
    }

    /// Single-point crossover at a fixed cut.
    ///
    /// Genes before `point` come from `self`, genes from `point` onward come
    /// from `other`. A `point` past the end yields a copy of `self`.
    pub fn crossover_at(&self, other: &Self, point: usize) -> Self {
        let point = point.min(self.genes.len());
        let mut genes = self.genes[..point].to_vec();
        genes.extend_from_slice(&other.genes[point..]);
        Self::new(genes)
    }

    pub fn as_string(&self) -> String {
        self.genes.iter().collect()
    }
}

impl Genotype for Candidate {
    fn mutate<R: Rng>(&mut self, rng: &mut R, rate: f32) {
        for gene in &mut self.genes {
            if rng.random::<f32>() < rate {
                *gene = alphabet::random_gene(rng);
            }
        }
    }

    fn crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> Self {
        if self.genes.is_empty() {
            return self.clone();
        }
        let point = rng.random_range(0..self.genes.len());
        self.crossover_at(other, point)
    }

    /// Hamming distance between the two gene strings.
    fn distance(&self, other: &Self) -> f32 {
        self.genes
            .iter()
            .zip(&other.genes)
            .filter(|(a, b)| a != b)
            .count() as f32
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.genes.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
