//! CLI for maze generation

use clap::Parser;
use lost_in_love::{ColorScheme, MazeGenerator, SeededRandom};

/// Print a finished maze without animation
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze height in cells
    #[arg(long, default_value_t = 18)]
    rows: usize,

    /// Maze width in cells
    #[arg(long, default_value_t = 18)]
    cols: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate maze, print it as emojis
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let random = SeededRandom::new(args.seed);
    let mut maze = MazeGenerator::new(
        args.cols,
        args.rows,
        0,
        ColorScheme::base(),
        random,
        args.cols as f64,
        args.rows as f64,
    )?;
    let steps = maze.run_to_completion();
    log::info!("Generated {}x{} maze in {} steps", args.cols, args.rows, steps);

    println!("{}", maze.grid().to_emojis());
    Ok(())
}
