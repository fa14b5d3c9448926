//! Maze generation, one step per frame
//!
//! Randomized depth-first search carves a perfect maze out of a grid of
//! closed cells. Carving starts from an open 3x3 room near the center of the
//! grid and ends by opening an exit on a random border cell.

use anyhow::ensure;

use crate::canvas::{Canvas, HAlign, LineCap, Point, VAlign};
use crate::colors::ColorScheme;
use crate::grid::{Grid, Side};
use crate::heart::{Heart, IconPlacement};
use crate::random::RandomSource;

/// Stage of the generation
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Phase {
    /// Nothing carved yet
    Unstarted,
    /// Carving or backtracking
    Running,
    /// Exit is open, nothing left to do
    Complete,
}

/// What a single call to [MazeGenerator::advance] did
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Step {
    /// Opened the start room around `start`, continuing from `current` with
    /// the other room cells on the stack
    Seeded { start: usize, current: usize },
    /// Carved a passage from one cell into its unvisited neighbor
    Carved { from: usize, to: usize },
    /// Returned to a previously visited cell
    Backtracked { to: usize },
    /// Opened the outer wall `side` of border cell `exit`
    Finished { exit: usize, side: Side },
    /// Maze was already complete
    Idle,
}

/// Result of drawing one frame
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum FrameStatus {
    /// More frames are needed
    InProgress,
    /// Maze is complete, stop the frame loop
    Complete,
}

/// Animated maze generator
pub struct MazeGenerator<R> {
    grid: Grid,
    /// Previously visited cells, most recent last
    stack: Vec<usize>,
    /// Cell that the carving continues from
    current: Option<usize>,
    center_icon: Option<Heart>,
    border_icon: Option<Heart>,
    padding_cells: usize,
    colors: ColorScheme,
    random: R,
    width: f64,
    height: f64,
    caption: Option<String>,
}

impl<R: RandomSource> MazeGenerator<R> {
    /// Offsets of the start room, in the order the cells are opened:
    /// center, right, down, left, up, down-right, up-right, down-left, up-left
    const START_ROOM: [(i32, i32); 9] = [
        (0, 0),
        (1, 0),
        (0, 1),
        (-1, 0),
        (0, -1),
        (1, 1),
        (-1, 1),
        (1, -1),
        (-1, -1),
    ];

    /// Create generator for a `cols` x `rows` maze on a `width` x `height`
    /// canvas
    ///
    /// - `padding_cells`: Empty space around the maze, counted in cells.
    ///   Half of it goes on each side.
    /// - `random`: Source of all random choices; the same sequence gives the
    ///   same maze.
    ///
    /// Returns error, if the grid would have no cells.
    pub fn new(
        cols: usize,
        rows: usize,
        padding_cells: usize,
        colors: ColorScheme,
        random: R,
        width: f64,
        height: f64,
    ) -> anyhow::Result<Self> {
        ensure!(
            cols > 0 && rows > 0,
            "Maze must have at least one column and one row, got {}x{}",
            cols,
            rows
        );
        Ok(Self {
            grid: Grid::new(cols, rows),
            stack: Vec::new(),
            current: None,
            center_icon: None,
            border_icon: None,
            padding_cells,
            colors,
            random,
            width,
            height,
            caption: None,
        })
    }

    /// Text drawn at the bottom right corner of every frame
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn stack(&self) -> &[usize] {
        &self.stack
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn center_icon(&self) -> Option<&Heart> {
        self.center_icon.as_ref()
    }

    pub fn border_icon(&self) -> Option<&Heart> {
        self.border_icon.as_ref()
    }

    pub fn colors(&self) -> &ColorScheme {
        &self.colors
    }

    pub fn cell_width(&self) -> f64 {
        self.width / (self.grid.cols() + self.padding_cells) as f64
    }

    pub fn cell_height(&self) -> f64 {
        self.height / (self.grid.rows() + self.padding_cells) as f64
    }

    pub fn phase(&self) -> Phase {
        if self.border_icon.is_some() {
            Phase::Complete
        } else if self.current.is_some() {
            Phase::Running
        } else {
            Phase::Unstarted
        }
    }

    /// Advance the generation by exactly one step
    pub fn advance(&mut self) -> Step {
        let step = match (self.phase(), self.current) {
            (Phase::Complete, _) => Step::Idle,
            (_, Some(current_idx)) => self.step_from(current_idx),
            (_, None) => self.seed_start(),
        };
        log::debug!("{:?}", step);
        step
    }

    /// Run [Self::advance] until the maze is complete
    ///
    /// Returns the number of steps taken.
    pub fn run_to_completion(&mut self) -> usize {
        let mut steps = 0;
        while self.phase() != Phase::Complete {
            self.advance();
            steps += 1;
        }
        steps
    }

    /// Open the start room near the center of the grid
    fn seed_start(&mut self) -> Step {
        let start_col = self.jittered_center(self.grid.cols());
        let start_row = self.jittered_center(self.grid.rows());
        log::info!("Starting maze at col={}, row={}", start_col, start_row);

        if self.center_icon.is_none() {
            self.center_icon = Some(Heart::new(
                start_col as i32,
                start_row as i32,
                self.cell_height(),
                IconPlacement::Center,
            ));
        }

        let room: Vec<usize> = Self::START_ROOM
            .iter()
            .filter_map(|(dx, dy)| self.grid.index(start_col as i32 + dx, start_row as i32 + dy))
            .collect();

        for &idx in &room {
            let cell = self.grid.cell_mut(idx);
            cell.visited = true;
            cell.is_start = true;
        }
        // Walls between two room cells come down, walls around the room stay
        for &a in &room {
            for &b in &room {
                self.grid.carve(a, b);
            }
        }

        // Every room cell but the last is a backtrack target, so the carving
        // reaches both sides of a room that spans the whole grid
        let start = start_col + start_row * self.grid.cols();
        let current = room.last().copied().unwrap_or(start);
        self.stack.extend(room.iter().copied().filter(|&idx| idx != current));
        self.current = Some(current);
        Step::Seeded { start, current }
    }

    /// Coordinate within `len / 4` of the middle of `0..len`
    ///
    /// Offsets alternate 0, +1, -1, +2, -2, ... so that a draw of zero lands
    /// on the middle itself.
    fn jittered_center(&mut self, len: usize) -> usize {
        let middle = len / 2;
        let spread = len / 4;
        let k = self.random.choose_index(2 * spread + 1);
        if k % 2 == 1 {
            middle + (k + 1) / 2
        } else {
            middle - k / 2
        }
    }

    /// Carve, backtrack or finish, starting from `current_idx`
    fn step_from(&mut self, current_idx: usize) -> Step {
        let cols = self.grid.cols();
        let (col, row) = (current_idx % cols, current_idx / cols);
        let neighbors = self.grid.unvisited_neighbors(col, row);

        if !neighbors.is_empty() {
            let (next_col, next_row) = neighbors[self.random.choose_index(neighbors.len())];
            let next_idx = next_col + next_row * cols;

            self.stack.push(current_idx);
            self.grid.cell_mut(next_idx).visited = true;
            self.grid.carve(current_idx, next_idx);
            self.current = Some(next_idx);

            Step::Carved {
                from: current_idx,
                to: next_idx,
            }
        } else if let Some(back) = self.stack.pop() {
            self.current = Some(back);
            Step::Backtracked { to: back }
        } else {
            self.open_exit()
        }
    }

    /// Open an outer wall of a random border cell and place the exit heart
    /// outside of it
    ///
    /// Corner cells are opened to the left or right rather than up or down.
    fn open_exit(&mut self) -> Step {
        self.current = None;

        let border_cells = self.grid.border_cells();
        if border_cells.is_empty() {
            return Step::Idle;
        }
        let exit = border_cells[self.random.choose_index(border_cells.len())];

        let (cols, rows) = (self.grid.cols(), self.grid.rows());
        let cell = self.grid.cell_mut(exit);
        let (col, row) = (cell.col as i32, cell.row as i32);
        let (side, icon_col, icon_row, placement) = if cell.col == 0 {
            (Side::Left, -1, row, IconPlacement::LeftBorder)
        } else if cell.col + 1 == cols {
            (Side::Right, cols as i32, row, IconPlacement::RightBorder)
        } else if cell.row == 0 {
            (Side::Top, col, -1, IconPlacement::TopBorder)
        } else {
            (Side::Bottom, col, rows as i32, IconPlacement::BottomBorder)
        };
        cell.set_wall(side, false);

        self.border_icon = Some(Heart::new(
            icon_col,
            icon_row,
            self.cell_height(),
            placement,
        ));
        log::info!("Maze complete, exit at col={}, row={} ({:?})", col, row, side);

        Step::Finished { exit, side }
    }

    /// Top left corner of the maze on the canvas
    fn margin(&self) -> Point {
        let half_padding = self.padding_cells as f64 / 2.0;
        Point::new(
            self.cell_width() * half_padding,
            self.cell_height() * half_padding,
        )
    }

    /// Draw the maze in its current state
    ///
    /// Unexplored cells are solid blocks, explored cells show their standing
    /// walls. Hearts and the caption go on top.
    pub fn render(&self, canvas: &mut impl Canvas) {
        let color = self.colors.foreground.to_rgb();
        let margin = self.margin();
        let (w, h) = (self.cell_width(), self.cell_height());
        let stroke_weight = w / 2.0;

        for cell in self.grid.cells() {
            let top_left = margin.offset(cell.col as f64 * w, cell.row as f64 * h);

            if !cell.visited {
                canvas.fill_rect(top_left, w, h, color);
                continue;
            }

            let top_right = top_left.offset(w, 0.0);
            let bottom_right = top_left.offset(w, h);
            let bottom_left = top_left.offset(0.0, h);
            let walls = [
                (cell.top_wall, top_left, top_right),
                (cell.right_wall, top_right, bottom_right),
                (cell.bottom_wall, bottom_right, bottom_left),
                (cell.left_wall, bottom_left, top_left),
            ];
            for (_, start, end) in walls.iter().filter(|(standing, _, _)| *standing) {
                canvas.line(*start, *end, stroke_weight, LineCap::Square, color);
            }
        }

        for icon in self.center_icon.iter().chain(self.border_icon.iter()) {
            icon.draw(canvas, margin, color);
        }

        if let Some(caption) = &self.caption {
            canvas.text(
                caption,
                Point::new(self.width - margin.x, self.height),
                10.0,
                (HAlign::Right, VAlign::Bottom),
                color,
            );
        }
    }

    /// Draw one frame, then advance the generation if it is not complete
    pub fn draw(&mut self, canvas: &mut impl Canvas) -> FrameStatus {
        self.render(canvas);
        if self.border_icon.is_some() {
            FrameStatus::Complete
        } else {
            self.advance();
            FrameStatus::InProgress
        }
    }
}
