use super::Cell;
use rayon::prelude::*;

/// Grid holds one generation of the automaton as a flat, row-major
/// buffer of single-byte cells addressed by `(col, row)`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    /// Dimensions whose product overflows give a 0×0 grid.
    pub fn new(cols: usize, rows: usize) -> Self {
        match cols.checked_mul(rows) {
            Some(len) => Self {
                cols,
                rows,
                cells: vec![Cell::Dead; len],
            },
            None => Self::default(),
        }
    }

    /// Get grid dimensions as `(cols, rows)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the grid has no cells (zero columns or rows)
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        (col < self.cols && row < self.rows).then(|| self.cells[self.index(col, row)])
    }

    /// Set cell at position; out-of-bounds writes are dropped
    pub fn set(&mut self, col: usize, row: usize, cell: Cell) {
        if col < self.cols && row < self.rows {
            let idx = self.index(col, row);
            self.cells[idx] = cell;
        }
    }

    /// Flip a cell. Returns false when the position is out of bounds.
    pub fn toggle(&mut self, col: usize, row: usize) -> bool {
        if col >= self.cols || row >= self.rows {
            return false;
        }
        let idx = self.index(col, row);
        self.cells[idx] = self.cells[idx].toggle();
        true
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus)
    pub fn count_live_neighbors(&self, col: usize, row: usize) -> u8 {
        let (cols, rows) = (self.cols, self.rows);
        if col >= cols || row >= rows {
            return 0;
        }
        let up = (row + rows - 1) % rows;
        let down = (row + 1) % rows;
        let left = (col + cols - 1) % cols;
        let right = (col + 1) % cols;

        [
            (left, up),
            (col, up),
            (right, up),
            (left, row),
            (right, row),
            (left, down),
            (col, down),
            (right, down),
        ]
        .iter()
        .map(|&(x, y)| self.cells[self.index(x, y)].as_byte())
        .sum()
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx % self.cols, idx / self.cols, cell))
    }

    /// Iterate over the positions of live cells only
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(col, row, _)| (col, row))
    }

    /// Raw byte view of the buffer (0 = dead, 1 = alive)
    pub fn to_bytes(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.as_byte()).collect()
    }

    /// Make `next` match our dimensions, reallocating only when they differ
    fn match_dimensions(&self, next: &mut Grid) {
        if next.dimensions() != self.dimensions() {
            *next = Grid::new(self.cols, self.rows);
        }
    }

    /// Next cell value at `(col, row)`
    fn next_cell(&self, col: usize, row: usize) -> Cell {
        let current = self.cells[self.index(col, row)];
        current.evolve(self.count_live_neighbors(col, row))
    }

    /// Serial evolution into a scratch grid.
    /// Every cell of `next` is written; its previous contents are never read.
    pub fn evolve_into(&self, next: &mut Grid) {
        self.match_dimensions(next);
        if self.is_empty() {
            return;
        }

        for (idx, slot) in next.cells.iter_mut().enumerate() {
            *slot = self.next_cell(idx % self.cols, idx / self.cols);
        }
    }

    /// Parallel evolution using rayon, one task per row.
    /// Produces exactly the same result as `evolve_into`, which stays the
    /// reference; this is only selected through `Algorithm::Parallel`.
    pub fn evolve_into_parallel(&self, next: &mut Grid) {
        self.match_dimensions(next);
        if self.is_empty() {
            return;
        }

        next.cells
            .par_chunks_mut(self.cols)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, slot) in out.iter_mut().enumerate() {
                    *slot = self.next_cell(col, row);
                }
            });
    }
}
