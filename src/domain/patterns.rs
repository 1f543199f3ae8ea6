use super::{Cell, Grid};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x + 1).max().unwrap_or(0);
        let height = cells.iter().map(|(_, y)| *y + 1).max().unwrap_or(0);
        Self { name, width, height, cells }
    }

    /// Build a pattern from a character grid.
    /// `#`, `O` and `*` are alive, anything else is dead. Rows may be ragged.
    pub fn from_rows(name: &'static str, rows: &[&str]) -> Self {
        let cells = rows
            .iter()
            .enumerate()
            .flat_map(|(y, line)| {
                line.chars()
                    .enumerate()
                    .filter(|(_, ch)| matches!(ch, '#' | 'O' | '*'))
                    .map(move |(x, _)| (x, y))
            })
            .collect();
        let mut pattern = Self::new(name, cells);
        pattern.width = pattern
            .width
            .max(rows.iter().map(|line| line.chars().count()).max().unwrap_or(0));
        pattern.height = pattern.height.max(rows.len());
        pattern
    }

    /// Flip left-to-right within the bounding box
    pub fn mirror_x(&self) -> Self {
        let cells = self.cells.iter().map(|&(x, y)| (self.width - 1 - x, y)).collect();
        Self { cells, ..self.clone() }
    }

    /// Flip top-to-bottom within the bounding box
    pub fn mirror_y(&self) -> Self {
        let cells = self.cells.iter().map(|&(x, y)| (x, self.height - 1 - y)).collect();
        Self { cells, ..self.clone() }
    }

    /// Place pattern with its top-left corner at `(col, row)`.
    /// Each cell is bounds-checked on its own; cells that land off the grid are dropped.
    /// Returns how many cells were written.
    pub fn place_on(&self, grid: &mut Grid, col: isize, row: isize) -> usize {
        let (cols, rows) = grid.dimensions();
        let mut written = 0;
        for &(dx, dy) in &self.cells {
            let x = col + dx as isize;
            let y = row + dy as isize;
            if x >= 0 && y >= 0 && (x as usize) < cols && (y as usize) < rows {
                grid.set(x as usize, y as usize, Cell::Alive);
                written += 1;
            }
        }
        written
    }
}

/// Seed templates used by the engine
pub mod presets {
    use super::*;

    /// Glider - heads down and to the right
    ///  . # .
    ///  . . #
    ///  # # #
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", vec![(0, 1), (1, 1), (2, 1)])
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Block letters spelling LIFE
    pub fn logo() -> Pattern {
        Pattern::from_rows(
            "Logo",
            &[
                "#....###.####.####",
                "#.....#..#....#...",
                "#.....#..###..###.",
                "#.....#..#....#...",
                "####.###.#....####",
            ],
        )
    }
}

const GLIDERS_WANTED: usize = 4;
const GLIDER_SLOT_HEIGHT: usize = 5;
const GLIDER_SPACING: usize = 7;
const GLIDER_COLUMN: isize = 2;
const GLIDER_TOP: usize = 2;

/// Corner gliders other than top-left need this many cells along the
/// mirrored axis so they don't overlap the top-left one.
const CORNER_SPREAD: usize = 12;
const CORNER_MARGIN: usize = 1;

const RANDOM_DENSITY: f64 = 0.3;

/// Which initial arrangement the engine writes after every (re)size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPattern {
    /// Leave the grid dead
    Empty,
    /// A column of gliders near the left edge
    #[default]
    Gliders,
    /// Gliders in the corners, each heading toward the centre
    CornerGliders,
    /// Block-letter logo in the centre
    Logo,
    /// 30% random soup
    Random,
}

impl SeedPattern {
    /// Get all seed patterns
    pub fn all() -> Vec<SeedPattern> {
        vec![
            SeedPattern::Empty,
            SeedPattern::Gliders,
            SeedPattern::CornerGliders,
            SeedPattern::Logo,
            SeedPattern::Random,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SeedPattern::Empty => "Empty",
            SeedPattern::Gliders => "Gliders",
            SeedPattern::CornerGliders => "Corner gliders",
            SeedPattern::Logo => "Logo",
            SeedPattern::Random => "Random",
        }
    }

    /// Smallest `(cols, rows)` on which anything is placed
    pub fn min_dims(&self) -> (usize, usize) {
        match self {
            SeedPattern::Empty | SeedPattern::Random => (1, 1),
            SeedPattern::Gliders => (5, 5),
            SeedPattern::CornerGliders => (10, 10),
            SeedPattern::Logo => {
                let logo = presets::logo();
                (logo.width + 2, logo.height + 2)
            }
        }
    }

    /// Clear the grid and write this pattern.
    /// Grids below `min_dims` are left empty. Returns the number of live cells written.
    pub fn seed(&self, grid: &mut Grid, rng_seed: u64) -> usize {
        grid.clear();

        let (cols, rows) = grid.dimensions();
        let (min_cols, min_rows) = self.min_dims();
        if cols < min_cols || rows < min_rows {
            return 0;
        }

        match self {
            SeedPattern::Empty => 0,
            SeedPattern::Gliders => seed_glider_column(grid),
            SeedPattern::CornerGliders => seed_corner_gliders(grid),
            SeedPattern::Logo => {
                let logo = presets::logo();
                let col = (cols - logo.width) / 2;
                let row = (rows - logo.height) / 2;
                logo.place_on(grid, col as isize, row as isize)
            }
            SeedPattern::Random => seed_random(grid, rng_seed),
        }
    }
}

/// How many gliders the column seeding will attempt for `rows`
pub fn glider_count(rows: usize) -> usize {
    let fits = (rows.saturating_sub(GLIDER_SLOT_HEIGHT) / GLIDER_SPACING + 1).max(1);
    GLIDERS_WANTED.min(fits)
}

fn seed_glider_column(grid: &mut Grid) -> usize {
    let (_, rows) = grid.dimensions();
    let glider = presets::glider();

    (0..glider_count(rows))
        .map(|i| GLIDER_TOP + i * GLIDER_SPACING)
        .filter(|&top| top + GLIDER_SLOT_HEIGHT < rows)
        .map(|top| glider.place_on(grid, GLIDER_COLUMN, top as isize))
        .sum()
}

fn seed_corner_gliders(grid: &mut Grid) -> usize {
    let (cols, rows) = grid.dimensions();
    let glider = presets::glider();
    let near = CORNER_MARGIN as isize;
    let far_col = cols as isize - (glider.width + CORNER_MARGIN) as isize;
    let far_row = rows as isize - (glider.height + CORNER_MARGIN) as isize;
    let wide = cols >= CORNER_SPREAD;
    let tall = rows >= CORNER_SPREAD;

    let corners = [
        (true, glider.clone(), near, near),
        (wide, glider.mirror_x(), far_col, near),
        (tall, glider.mirror_y(), near, far_row),
        (wide && tall, glider.mirror_x().mirror_y(), far_col, far_row),
    ];

    corners
        .into_iter()
        .filter(|(enabled, ..)| *enabled)
        .map(|(_, pattern, col, row)| pattern.place_on(grid, col, row))
        .sum()
}

fn seed_random(grid: &mut Grid, rng_seed: u64) -> usize {
    let (cols, rows) = grid.dimensions();
    let mut rng = StdRng::seed_from_u64(rng_seed);
    let mut written = 0;
    for row in 0..rows {
        for col in 0..cols {
            if rng.random_bool(RANDOM_DENSITY) {
                grid.set(col, row, Cell::Alive);
                written += 1;
            }
        }
    }
    written
}
