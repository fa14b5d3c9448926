//! Find love in a maze
//!
//! A greeting card with a unique maze for two names. The maze is carved one
//! step per frame from a heart in the middle until an exit opens on the
//! border, marked with a second heart.
//!
//! # Examples
//! ## Generate the card for two names
//! ```
//! use lost_in_love::{Canvas, ColorScheme, FrameStatus, MazeGenerator, SeededRandom, SvgCanvas};
//!
//! let mut random = SeededRandom::from_names("Romeo", "Juliet");
//! let colors = ColorScheme::randomized(&mut random);
//! let mut maze = MazeGenerator::new(18, 18, 4, colors, random, 450.0, 450.0)
//!     .unwrap()
//!     .with_caption("Romeo ♥ Juliet");
//!
//! let mut canvas = SvgCanvas::new(450.0, 450.0);
//! loop {
//!     canvas.background(colors.background.to_rgb());
//!     if maze.draw(&mut canvas) == FrameStatus::Complete {
//!         break;
//!     }
//! }
//! assert!(canvas.to_svg().contains("Romeo ♥ Juliet"));
//! ```
//!
//! ## Step through a small maze
//! ```
//! use lost_in_love::{ColorScheme, MazeGenerator, Phase, SeededRandom, Step};
//!
//! let random = SeededRandom::new(Some(1));
//! let mut maze = MazeGenerator::new(5, 5, 0, ColorScheme::base(), random, 100.0, 100.0).unwrap();
//! assert!(matches!(maze.advance(), Step::Seeded { .. }));
//! maze.run_to_completion();
//! assert_eq!(maze.phase(), Phase::Complete);
//! println!("{}", maze.grid().to_emojis());
//! ```

pub mod canvas;
pub mod colors;
pub mod grid;
pub mod heart;
pub mod maze_generator;
pub mod random;

pub use canvas::{Canvas, SvgCanvas};
pub use colors::{ColorScheme, Hsl, Rgb};
pub use grid::{Cell, Grid, Side};
pub use heart::{Heart, IconPlacement};
pub use maze_generator::{FrameStatus, MazeGenerator, Phase, Step};
pub use random::{seed_from_names, RandomSource, SeededRandom};
