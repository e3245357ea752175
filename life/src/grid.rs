// grid.rs - Board cells and the generation rule for Conway's Game of Life

// Compile-time board size
pub const BOARD_DIMENSION: usize = 30;                // Cells per side (30x30 board)

const DIRECTIONS: [isize; 3] = [-1, 0, 1];            // Neighbor offsets along one axis

/// State of a single board position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

type TRow = [Cell; BOARD_DIMENSION];
type TGrid = [TRow; BOARD_DIMENSION];

/// Fixed-size square board, indexed `[row][column]`.
///
/// Rows run along the screen's y axis and columns along its x axis. Every
/// accessor taking signed coordinates ignores positions outside the board,
/// so pointer-derived values can be passed straight through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: TGrid,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// An all-dead board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Dead; BOARD_DIMENSION]; BOARD_DIMENSION],
        }
    }

    /// Build a board with the given `(row, column)` positions alive.
    /// Positions off the board are dropped.
    pub fn with_alive(positions: &[(i32, i32)]) -> Self {
        let mut grid = Self::new();
        for &(row, column) in positions {
            grid.set(row, column, Cell::Alive);
        }
        grid
    }

    pub fn dimension(&self) -> usize {
        BOARD_DIMENSION
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(Cell::Dead);
        }
    }

    /// Cell at `(row, column)`, or `None` when off the board.
    pub fn get(&self, row: i32, column: i32) -> Option<Cell> {
        Self::index(row, column).map(|(r, c)| self.cells[r][c])
    }

    /// Write `cell` at `(row, column)`. Returns false, leaving the board
    /// untouched, when the position is off the board.
    pub fn set(&mut self, row: i32, column: i32, cell: Cell) -> bool {
        match Self::index(row, column) {
            Some((r, c)) => {
                self.cells[r][c] = cell;
                true
            }
            None => false,
        }
    }

    /// Number of alive cells on the board.
    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_alive()).count())
            .sum()
    }

    /// Alive cells among the eight neighbors of `(row, column)`.
    /// Neighbors off the board do not exist and are never read.
    pub fn live_neighbors(&self, row: usize, column: usize) -> u8 {
        let mut count = 0;

        for vertical_step in DIRECTIONS {
            for horizontal_step in DIRECTIONS {
                if vertical_step == 0 && horizontal_step == 0 {
                    continue;
                }

                let Some(current_row) = row.checked_add_signed(vertical_step) else {
                    continue;
                };
                let Some(current_column) = column.checked_add_signed(horizontal_step) else {
                    continue;
                };
                if current_row >= BOARD_DIMENSION || current_column >= BOARD_DIMENSION {
                    continue;
                }

                if self.cells[current_row][current_column].is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Compute the following generation from this one.
    ///
    /// Every cell is decided from `self` alone, so no cell ever sees a
    /// neighbor that has already been updated.
    pub fn next_generation(&self) -> Grid {
        let mut next = Grid::new();

        for row in 0..BOARD_DIMENSION {
            for column in 0..BOARD_DIMENSION {
                next.cells[row][column] = match self.live_neighbors(row, column) {
                    2 => self.cells[row][column],   // Survival (or stays dead)
                    3 => Cell::Alive,               // Birth or survival
                    _ => Cell::Dead,                // Under- or overpopulation
                };
            }
        }
        next
    }

    fn index(row: i32, column: i32) -> Option<(usize, usize)> {
        let r = usize::try_from(row).ok().filter(|&r| r < BOARD_DIMENSION)?;
        let c = usize::try_from(column).ok().filter(|&c| c < BOARD_DIMENSION)?;
        Some((r, c))
    }
}
