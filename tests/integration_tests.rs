use phrase_genetics::{
    Candidate, Evolver, Genotype, Target, algorithms::population::Population, alphabet::ALPHABET,
};
use rand::prelude::SeedableRng;
use rand_pcg::Pcg64;

fn candidate(genes: &str) -> Candidate {
    Candidate::new(genes.chars().collect())
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_population_has_requested_size_and_gene_length() {
    let population = Population::new("hello world", 137, 0.01, 42).unwrap();

    assert_eq!(population.population().len(), 137);
    assert_eq!(population.pop_size(), 137);
    assert_eq!(population.generation(), 0);
    assert!(!population.is_finished());
    for c in population.population() {
        assert_eq!(c.genes.len(), 11);
        assert!(c.genes.iter().all(|g| ALPHABET.contains(g)));
    }
}

#[test]
fn test_gene_length_counts_characters_not_bytes() {
    let population = Population::new("héllo", 10, 0.01, 1).unwrap();
    assert!(population.population().iter().all(|c| c.genes.len() == 5));
}

// ============================================================================
// Fitness
// ============================================================================

#[test]
fn test_fitness_is_fraction_of_matching_positions() {
    let target = Target::new("hello").unwrap();

    assert_eq!(candidate("hello").calculate_fitness(&target), 1.0);
    assert_eq!(candidate("hxllo").calculate_fitness(&target), 0.8);
    assert_eq!(candidate("zzzzz").calculate_fitness(&target), 0.0);
    assert_eq!(candidate("olleh").calculate_fitness(&target), 0.2);
}

#[test]
fn test_fitness_is_bounded_and_exact_only_on_match() {
    let mut population = Population::new("the quick brown fox", 500, 0.05, 7).unwrap();
    for _ in 0..30 {
        population.calculate_fitness();
        for c in population.population() {
            assert!((0.0..=1.0).contains(&c.fitness), "fitness {} out of range", c.fitness);
            let exact = population.target().matches(&c.genes);
            assert_eq!(c.fitness == 1.0, exact, "candidate [{}]", c);
        }
        population.step();
    }
}

// ============================================================================
// Evaluation & statistics
// ============================================================================

#[test]
fn test_evaluate_sorts_descending() {
    let mut population = Population::new("abcdef", 300, 0.01, 3).unwrap();
    population.calculate_fitness();
    population.evaluate();

    let fitness: Vec<f32> = population.population().iter().map(|c| c.fitness).collect();
    assert!(fitness.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(population.best().fitness, fitness[0]);
}

#[test]
fn test_average_fitness_matches_population_mean() {
    let mut population = Population::new("average me", 250, 0.02, 11).unwrap();
    for _ in 0..10 {
        population.calculate_fitness();
        population.evaluate();
        let stats = population.stats();

        let pop = population.population();
        let mean = pop.iter().map(|c| c.fitness).sum::<f32>() / pop.len() as f32;
        assert!(
            (stats.average_fitness - mean).abs() < 1e-5,
            "average {} vs mean {}",
            stats.average_fitness,
            mean
        );
        assert_eq!(stats.highest_fitness, pop[0].fitness);
        assert_eq!(stats.pop_size, 250);
        assert_eq!(stats.generation, population.generation());

        population.reproduce();
    }
}

#[test]
fn test_step_reports_scored_generation_then_advances() {
    let mut population = Population::new("step", 100, 0.01, 5).unwrap();
    let stats = population.step();

    assert_eq!(stats.generation, 0);
    assert_eq!(population.generation(), 1);
    assert_eq!(stats.best.genes.len(), 4);
}

#[test]
fn test_stats_snapshot_is_not_affected_by_later_steps() {
    let mut population = Population::new("snapshot", 200, 0.5, 9).unwrap();
    let stats = population.step();
    let saved = stats.clone();

    for _ in 0..10 {
        population.step();
    }

    assert_eq!(stats, saved);
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_crossover_at_fixed_point() {
    let one = candidate("aaaaaaaa");
    let two = candidate("bbbbbbbb");

    for k in 0..8 {
        let child = one.crossover_at(&two, k);
        assert_eq!(child.genes.len(), 8);
        assert_eq!(&child.genes[..k], &one.genes[..k]);
        assert_eq!(&child.genes[k..], &two.genes[k..]);
        assert_eq!(child.fitness, 0.0);
    }
}

#[test]
fn test_random_crossover_is_single_point() {
    let one = candidate("aaaaaaaaaaaa");
    let two = candidate("bbbbbbbbbbbb");
    let mut rng = Pcg64::seed_from_u64(42);

    for _ in 0..200 {
        let child = one.crossover(&two, &mut rng);
        let s = child.as_string();
        let k = s.find('b').unwrap_or(s.len());
        assert!(s[..k].chars().all(|c| c == 'a'));
        assert!(s[k..].chars().all(|c| c == 'b'), "not single point: {s}");
        // The cut is drawn from [0, len), so parent two always contributes.
        assert!(k < 12);
    }
}

#[test]
fn test_mutation_rate_one_resamples_every_gene() {
    let mut rng = Pcg64::seed_from_u64(42);
    let original = candidate(&"#".repeat(1000));
    let mut mutated = original.clone();
    mutated.mutate(&mut rng, 1.0);

    // '#' is not in the alphabet, so every resampled gene differs.
    assert!(mutated.genes.iter().all(|g| ALPHABET.contains(g)));
    assert_eq!(mutated.distance(&original), 1000.0);
}

#[test]
fn test_mutation_rate_one_changes_almost_all_alphabet_genes() {
    let mut rng = Pcg64::seed_from_u64(7);
    let mut changed = 0;
    let trials = 200;
    for _ in 0..trials {
        let original = Candidate::random(&mut rng, 50);
        let mut mutated = original.clone();
        mutated.mutate(&mut rng, 1.0);
        changed += mutated.distance(&original) as usize;
    }

    // A resampled gene keeps its value with probability 1/27.
    let fraction = changed as f32 / (trials * 50) as f32;
    assert!(fraction > 0.9, "only {fraction} of genes changed");
}

#[test]
fn test_mutation_rate_zero_changes_nothing() {
    let mut rng = Pcg64::seed_from_u64(7);
    for _ in 0..200 {
        let original = Candidate::random(&mut rng, 50);
        let mut mutated = original.clone();
        mutated.mutate(&mut rng, 0.0);
        assert_eq!(mutated, original);
    }
}

#[test]
fn test_distance_is_hamming() {
    assert_eq!(candidate("abc").distance(&candidate("abc")), 0.0);
    assert_eq!(candidate("abc").distance(&candidate("abd")), 1.0);
    assert_eq!(candidate("abc").distance(&candidate("xyz")), 3.0);
}

// ============================================================================
// Termination
// ============================================================================

#[test]
fn test_finished_latches_and_step_becomes_noop() {
    let mut population = Population::new("go", 200, 0.05, 42).unwrap();
    while !population.is_finished() {
        assert!(population.generation() < 500, "did not converge");
        population.step();
    }

    let generation = population.generation();
    let snapshot = population.population().to_vec();
    let stats = population.stats();
    assert_eq!(stats.best.as_string(), "go");
    assert_eq!(stats.highest_fitness, 1.0);

    for _ in 0..5 {
        let again = population.step();
        assert!(population.is_finished());
        assert_eq!(population.generation(), generation);
        assert_eq!(population.population(), snapshot.as_slice());
        assert_eq!(again, stats);
    }

    population.reproduce();
    assert_eq!(population.generation(), generation);
}

#[test]
fn test_same_seed_same_evolution() {
    let mut a = Population::new("deterministic", 150, 0.02, 1234).unwrap();
    let mut b = Population::new("deterministic", 150, 0.02, 1234).unwrap();

    for _ in 0..25 {
        assert_eq!(a.step(), b.step());
    }
    assert_eq!(a.population(), b.population());
}

#[test]
fn test_different_seeds_diverge() {
    let a = Population::new("deterministic", 150, 0.02, 1).unwrap();
    let b = Population::new("deterministic", 150, 0.02, 2).unwrap();
    assert_ne!(a.population(), b.population());
}
