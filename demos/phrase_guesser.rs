//! Terminal rendition of the homepage widget: the best guess of each
//! generation followed by the run statistics.
//!
//! ```text
//! cargo run --example phrase_guesser -- "hello world" --pop-size 1000
//! RUST_LOG=phrase_genetics=debug cargo run --example phrase_guesser -- "hi"
//! ```

use clap::Parser;
use phrase_genetics::{EvolutionConfig, Evolver, algorithms::population::Population};
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Evolve random strings toward a phrase")]
struct Args {
    /// Phrase to guess (lowercase letters and spaces converge)
    #[arg(default_value = "hello world")]
    phrase: String,

    /// Candidates per generation
    #[arg(short = 'n', long, default_value = "1000")]
    pop_size: usize,

    /// Per-gene mutation probability
    #[arg(short, long, default_value = "0.01")]
    mutation_rate: f32,

    /// RNG seed (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pause between frames, in milliseconds
    #[arg(short, long, default_value = "20")]
    delay_ms: u64,

    /// Give up after this many generations
    #[arg(short = 'g', long, default_value = "10000")]
    max_generations: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut config = EvolutionConfig::new(args.phrase)
        .with_pop_size(args.pop_size)
        .with_mutation_rate(args.mutation_rate);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut population = match Population::from_config(&config) {
        Ok(population) => population,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    let delay = Duration::from_millis(args.delay_ms);
    while !population.is_finished() && population.generation() < args.max_generations {
        let stats = population.step();
        println!(
            "{:<width$} | generation: {:>5} | highest fitness: {:.2} | average fitness: {:.2} | pop. size: {}",
            stats.best.as_string(),
            stats.generation,
            stats.highest_fitness,
            stats.average_fitness,
            stats.pop_size,
            width = population.target().len(),
        );
        thread::sleep(delay);
    }

    if population.is_finished() {
        println!("🎯 Target reached at Gen {}!", population.generation());
    } else {
        println!("Gave up after {} generations", population.generation());
    }
}
