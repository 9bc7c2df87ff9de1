//! Command-line search visualizer.
//!
//! Run: cargo run --bin pathviz -- --maze division --algorithm astar

use std::error::Error;

use clap::Parser;
use pathviz_core::GridConfig;
use pathviz_demos::{MazeKind, build_board, render, stats_table};
use pathviz_maze::MazeConfig;
use pathviz_search::{Algorithm, PathSearch};
use rand::RngExt;

#[derive(Parser, Debug)]
#[command(name = "pathviz", about = "Run grid search algorithms on generated boards")]
struct Args {
    /// Board height.
    #[arg(long, default_value_t = GridConfig::default().rows)]
    rows: i32,

    /// Board width.
    #[arg(long, default_value_t = GridConfig::default().cols)]
    cols: i32,

    /// Keep the size within the interactive limits (30..=70 by 50..=120).
    #[arg(long)]
    clamp: bool,

    /// How to prepare the board.
    #[arg(long, value_enum, default_value_t = MazeKind::Division)]
    maze: MazeKind,

    /// Seed for the board generator; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Run a single algorithm instead of all of them.
    #[arg(long, short)]
    algorithm: Option<Algorithm>,

    /// Only print the statistics table.
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut size = GridConfig::new(args.rows, args.cols);
    if args.clamp {
        size = size.clamped();
    }
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("{}x{} board, {:?} maze, seed {seed}", size.rows, size.cols, args.maze);

    let board = build_board(&size, args.maze, seed, &MazeConfig::default())?;

    let algorithms = match args.algorithm {
        Some(alg) => vec![alg],
        None => Algorithm::ALL.to_vec(),
    };
    let mut search = PathSearch::new();
    let mut results = Vec::with_capacity(algorithms.len());
    for alg in algorithms {
        let res = search.search(alg, &board);
        if !args.quiet {
            println!("{}", alg.label());
            println!("{}\n", render(&board, &res));
        }
        results.push(res);
    }

    print!("{}", stats_table(&results));
    println!("seed {seed}");
    Ok(())
}
