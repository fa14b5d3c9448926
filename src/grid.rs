//! Rectangular grid of maze cells

use itertools::Itertools;

/// Side of a cell
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Side of the neighboring cell that shares the same wall
    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }
}

/// Single square of the maze
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
    pub top_wall: bool,
    pub right_wall: bool,
    pub bottom_wall: bool,
    pub left_wall: bool,
    /// Cell has been reached by the carving algorithm
    pub visited: bool,
    /// Cell belongs to the open 3x3 room around the starting point
    pub is_start: bool,
}

impl Cell {
    /// New unvisited cell with all four walls standing
    pub fn new(col: usize, row: usize) -> Self {
        Self {
            col,
            row,
            top_wall: true,
            right_wall: true,
            bottom_wall: true,
            left_wall: true,
            visited: false,
            is_start: false,
        }
    }

    pub fn wall(&self, side: Side) -> bool {
        match side {
            Side::Top => self.top_wall,
            Side::Right => self.right_wall,
            Side::Bottom => self.bottom_wall,
            Side::Left => self.left_wall,
        }
    }

    pub fn set_wall(&mut self, side: Side, standing: bool) {
        match side {
            Side::Top => self.top_wall = standing,
            Side::Right => self.right_wall = standing,
            Side::Bottom => self.bottom_wall = standing,
            Side::Left => self.left_wall = standing,
        }
    }
}

/// Cells of the maze in row-major order
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Neighbor offsets `(dx, dy)` in enumeration order: top, right, bottom, left
    pub const DIRECTIONS: [(i32, i32, Side); 4] = [
        (0, -1, Side::Top),
        (1, 0, Side::Right),
        (0, 1, Side::Bottom),
        (-1, 0, Side::Left),
    ];

    const S_WALL: char = '🟫';
    const S_OPEN: char = '🟩';
    const S_UNVISITED: char = '⬛';
    const S_START: char = '💖';

    pub fn new(cols: usize, rows: usize) -> Self {
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new(col, row)))
            .collect();
        Self { cols, rows, cells }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Linear index of `(col, row)`, or `None` outside of the grid
    ///
    /// Takes signed coordinates so that callers may probe one step past
    /// the edges; nothing wraps around.
    pub fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            None
        } else {
            Some(col as usize + row as usize * self.cols)
        }
    }

    /// Direct lookup, panics on invalid index
    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    pub fn cell_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }

    pub fn cell_at(&self, col: i32, row: i32) -> Option<&Cell> {
        self.index(col, row).map(|index| &self.cells[index])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell lies on the outermost ring of the grid
    pub fn is_border(&self, cell: &Cell) -> bool {
        cell.col == 0 || cell.col + 1 == self.cols || cell.row == 0 || cell.row + 1 == self.rows
    }

    pub fn border_cells(&self) -> Vec<usize> {
        (0..self.cells.len())
            .filter(|&idx| self.is_border(&self.cells[idx]))
            .collect()
    }

    /// In-bounds neighbors `(col, row)` that have not been visited yet
    ///
    /// Order is top, right, bottom, left.
    pub fn unvisited_neighbors(&self, col: usize, row: usize) -> Vec<(usize, usize)> {
        Self::DIRECTIONS
            .iter()
            .filter_map(|(dx, dy, _)| {
                let new_col = col as i32 + dx;
                let new_row = row as i32 + dy;
                self.cell_at(new_col, new_row)
                    .filter(|cell| !cell.visited)
                    .map(|cell| (cell.col, cell.row))
            })
            .collect()
    }

    /// Remove the shared wall between two adjacent cells
    ///
    /// Returns the side of `from` that was opened, or `None` when the cells
    /// are not 4-connected neighbors.
    pub fn carve(&mut self, from: usize, to: usize) -> Option<Side> {
        let (from_col, from_row) = (self.cells[from].col as i32, self.cells[from].row as i32);
        let (to_col, to_row) = (self.cells[to].col as i32, self.cells[to].row as i32);

        let side = match (to_col - from_col, to_row - from_row) {
            (1, 0) => Side::Right,
            (-1, 0) => Side::Left,
            (0, 1) => Side::Bottom,
            (0, -1) => Side::Top,
            _ => return None,
        };
        self.cells[from].set_wall(side, false);
        self.cells[to].set_wall(side.opposite(), false);
        Some(side)
    }

    /// Emoji picture of the grid, `(2 * rows + 1)` lines of `(2 * cols + 1)` squares
    pub fn to_emojis(&self) -> String {
        let width = 2 * self.cols + 1;
        let height = 2 * self.rows + 1;
        let mut squares = vec![vec![Self::S_WALL; width]; height];

        for cell in &self.cells {
            let (x, y) = (2 * cell.col + 1, 2 * cell.row + 1);
            squares[y][x] = match (cell.visited, cell.is_start) {
                (false, _) => Self::S_UNVISITED,
                (true, true) => Self::S_START,
                (true, false) => Self::S_OPEN,
            };
            if !cell.visited {
                continue;
            }
            if !cell.top_wall {
                squares[y - 1][x] = Self::S_OPEN;
            }
            if !cell.right_wall {
                squares[y][x + 1] = Self::S_OPEN;
            }
            if !cell.bottom_wall {
                squares[y + 1][x] = Self::S_OPEN;
            }
            if !cell.left_wall {
                squares[y][x - 1] = Self::S_OPEN;
            }
        }

        squares.iter().map(|row| row.iter().join("")).join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::{Grid, Side};

    #[test]
    fn index_is_row_major() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(3, 0), Some(3));
        assert_eq!(grid.index(1, 2), Some(9));
        assert_eq!(grid.cell(9).col, 1);
        assert_eq!(grid.cell(9).row, 2);
    }

    #[test]
    fn index_out_of_bounds_does_not_wrap() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(0, -1), None);
        assert_eq!(grid.index(4, 0), None);
        assert_eq!(grid.index(0, 3), None);
    }

    #[test]
    fn corner_has_only_right_and_down_neighbors() {
        let grid = Grid::new(4, 4);
        assert_eq!(grid.unvisited_neighbors(0, 0), vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn visited_neighbors_are_skipped() {
        let mut grid = Grid::new(3, 3);
        grid.cell_mut(1).visited = true;
        assert_eq!(grid.unvisited_neighbors(1, 1), vec![(2, 1), (1, 2), (0, 1)]);
    }

    #[test]
    fn border_cells_form_outer_ring() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.border_cells(), vec![0, 1, 2, 3, 4, 7, 8, 9, 10, 11]);
        assert!(!grid.is_border(grid.cell(5)));

        let single = Grid::new(1, 1);
        assert!(single.is_border(single.cell(0)));
    }

    #[test]
    fn carve_clears_both_sides() {
        let mut grid = Grid::new(3, 3);

        assert_eq!(grid.carve(4, 5), Some(Side::Right));
        assert!(!grid.cell(4).right_wall);
        assert!(!grid.cell(5).left_wall);

        assert_eq!(grid.carve(4, 1), Some(Side::Top));
        assert!(!grid.cell(4).top_wall);
        assert!(!grid.cell(1).bottom_wall);

        assert_eq!(grid.carve(0, 8), None);
        assert!(grid.cell(0).right_wall && grid.cell(8).left_wall);
    }

    #[test]
    fn emojis_mark_every_start_room_cell() {
        let mut grid = Grid::new(3, 1);
        for idx in 0..2 {
            grid.cell_mut(idx).visited = true;
            grid.cell_mut(idx).is_start = true;
        }
        grid.carve(0, 1);

        assert_eq!(
            grid.to_emojis(),
            "🟫🟫🟫🟫🟫🟫🟫\n🟫💖🟩💖🟫⬛🟫\n🟫🟫🟫🟫🟫🟫🟫"
        );
    }

    #[test]
    fn emojis_show_carved_passages() {
        let mut grid = Grid::new(2, 1);
        grid.cell_mut(0).visited = true;
        grid.cell_mut(1).visited = true;
        grid.carve(0, 1);

        assert_eq!(grid.to_emojis(), "🟫🟫🟫🟫🟫\n🟫🟩🟩🟩🟫\n🟫🟫🟫🟫🟫");
    }
}
