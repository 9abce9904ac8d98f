use crate::candidate::Candidate;
use serde::{Deserialize, Serialize};

/// Summary of one scored generation.
///
/// `best` is an owned copy, so a snapshot kept across steps never observes
/// later generations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub best: Candidate,
    pub generation: u64,
    pub pop_size: usize,
    pub highest_fitness: f32,
    pub average_fitness: f32,
}

/// Arithmetic mean of the stored fitness values. No re-scoring happens here.
pub fn average_fitness(candidates: &[Candidate]) -> f32 {
    if candidates.is_empty() {
        return 0.0;
    }
    let total: f32 = candidates.iter().map(|c| c.fitness).sum();
    total / candidates.len() as f32
}
