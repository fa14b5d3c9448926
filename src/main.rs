//! CLI for drawing the greeting card

use std::{env, fs, path::PathBuf, thread, time::Duration};

use anyhow::Context;
use clap::Parser;
use lost_in_love::{Canvas, ColorScheme, FrameStatus, MazeGenerator, SeededRandom, SvgCanvas};

/// Lost in Love: a unique maze for two names
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Your name
    #[arg(long, default_value = "Romeo")]
    me: String,

    /// Their name
    #[arg(long, default_value = "Juliet")]
    you: String,

    /// Maze width in cells
    #[arg(long, default_value_t = 18)]
    cols: usize,

    /// Maze height in cells
    #[arg(long, default_value_t = 18)]
    rows: usize,

    /// Empty space around the maze, in cells
    #[arg(long, default_value_t = 4)]
    padding: usize,

    /// Card width and height in pixels
    #[arg(long, default_value_t = 450.0)]
    size: f64,

    /// Directory for the saved card. Defaults to `SAVES_LOCATION`, or the
    /// current directory.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Display the carving on the terminal
    #[arg(short, long)]
    playback: bool,

    /// Playback frame length in milliseconds
    #[arg(short, long, default_value_t = 30)]
    frame_length: u64,
}

fn saves_location(output: Option<PathBuf>) -> PathBuf {
    output
        .or_else(|| env::var_os("SAVES_LOCATION").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Animate the maze until the exit opens, then save the last frame
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let me = args.me.trim();
    let you = args.you.trim();
    let mut random = SeededRandom::from_names(me, you);
    let colors = ColorScheme::randomized(&mut random);
    let mut maze = MazeGenerator::new(
        args.cols, args.rows, args.padding, colors, random, args.size, args.size,
    )?
    .with_caption(format!("{} ♥ {} at http://love.berk.es", me, you));

    let mut canvas = SvgCanvas::new(args.size, args.size);
    let mut frames = 0;
    loop {
        canvas.background(colors.background.to_rgb());
        let status = maze.draw(&mut canvas);
        frames += 1;

        if args.playback {
            print!("\x1B[2J\x1B[1;1H");
            println!("{}", maze.grid().to_emojis());
            thread::sleep(Duration::from_millis(args.frame_length));
        }
        if status == FrameStatus::Complete {
            break;
        }
    }
    log::info!("Maze complete after {} frames", frames);

    let dir = saves_location(args.output);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create directory {}", dir.display()))?;
    let file = dir.join(format!("maze-{}-{}.svg", me, you));
    fs::write(&file, canvas.to_svg())
        .with_context(|| format!("Could not save card to {}", file.display()))?;
    println!("Saved to file://{}", file.display());
    Ok(())
}
