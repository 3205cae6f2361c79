//! # u-tour CLI
//!
//! Builds the best repeated nearest-neighbor tour for a distance matrix read
//! from a JSON file, generated at random, or the built-in 4-vertex demo.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env, Target};
use log::{error, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_tour::{DistanceMatrix, TourBuilder, TourConfig};

/// Upper bound for `--random`; construction is cubic in the vertex count.
const MAX_RANDOM_VERTICES: i64 = 5_000;

/// Command-line interface for u-tour
#[derive(Parser)]
#[command(name = "u-tour")]
#[command(about = "Repeated nearest-neighbor TSP tours from a distance matrix")]
#[command(long_about = "Builds a nearest-neighbor tour from every starting vertex and prints the shortest:
  u-tour                               # Built-in 4-vertex demo matrix
  u-tour --matrix graph.json           # JSON array of rows, e.g. [[0,3],[3,0]]
  u-tour --random 50 --seed 7          # Random symmetric 50-vertex matrix")]
#[command(version)]
struct Cli {
    /// JSON file holding the distance matrix as an array of rows
    #[arg(short, long, conflicts_with = "random")]
    matrix: Option<PathBuf>,

    /// Generate a random symmetric matrix with this many vertices
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_RANDOM_VERTICES))]
    random: Option<u32>,

    /// Seed for --random
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Largest edge weight for --random
    #[arg(long, default_value_t = 100)]
    max_weight: u64,

    /// Evaluate starting vertices in parallel
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel (0 = all cores)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Print the tour as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn demo_matrix() -> Result<DistanceMatrix> {
    Ok(DistanceMatrix::from_rows(&[
        vec![0, 29, 20, 21],
        vec![29, 0, 15, 17],
        vec![20, 15, 0, 28],
        vec![21, 17, 28, 0],
    ])?)
}

fn load_matrix(cli: &Cli) -> Result<DistanceMatrix> {
    if let Some(path) = &cli.matrix {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return serde_json::from_str(&text)
            .with_context(|| format!("invalid distance matrix in {}", path.display()));
    }
    if let Some(size) = cli.random {
        let mut rng = StdRng::seed_from_u64(cli.seed);
        return Ok(DistanceMatrix::random_symmetric(
            size as usize,
            cli.max_weight,
            &mut rng,
        )?);
    }
    demo_matrix()
}

fn init_logger(verbose: u8) {
    logger_builder(Env::default(), verbose)
        .target(Target::Stderr)
        .init();
}

/// The environment filter decides unless `-v` is given; without either,
/// only warnings and errors are shown.
fn logger_builder(env: Env<'_>, verbose: u8) -> Builder {
    let mut builder = Builder::from_env(env.default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let matrix = load_matrix(cli)?;
    let config = TourConfig::default()
        .with_parallel(cli.parallel)
        .with_num_threads(cli.threads);

    let best = TourBuilder::new(&matrix)
        .with_config(config)
        .build_best_tour()
        .context("tour construction failed")?;

    if cli.json {
        println!("{}", serde_json::to_string(&best)?);
    } else {
        println!("Best path length: {}", best.length);
        let path: Vec<String> = best.path.iter().map(ToString::to_string).collect();
        println!("Hamiltonian circuit: {}", path.join(" -> "));
    }
    Ok(())
}
