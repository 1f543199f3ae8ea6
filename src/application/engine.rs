use log::{debug, info, trace, warn};

use crate::domain::{Algorithm, Grid, SeedPattern};
use super::LifeConfig;

/// Largest grid `resize` will allocate; anything bigger becomes 0×0
pub const MAX_CELLS: usize = 1 << 26;

/// LifeEngine owns the authoritative grid state.
/// Two equally sized buffers are kept; `step` fills the scratch one and swaps.
pub struct LifeEngine {
    current: Grid,
    scratch: Grid,
    cell_size: u32,
    seed_pattern: SeedPattern,
    algorithm: Algorithm,
    random_seed: u64,
    reseeds: u64,
    running: bool,
    generation: u64,
}

impl LifeEngine {
    /// Create an engine with an unallocated (0×0) grid.
    /// Call `resize` once the host knows its size.
    pub fn new(config: &LifeConfig) -> Self {
        Self {
            current: Grid::new(0, 0),
            scratch: Grid::new(0, 0),
            cell_size: config.cell_size.max(1),
            seed_pattern: config.seed_pattern,
            algorithm: config.algorithm,
            random_seed: config.random_seed,
            reseeds: 0,
            running: config.initial_running,
            generation: 0,
        }
    }

    /// Recompute dimensions from a logical pixel size and reseed.
    /// Prior state is discarded. Negative, NaN, infinite or oversized
    /// dimensions give an empty grid.
    pub fn resize(&mut self, width: f32, height: f32) {
        let cell = self.cell_size as f32;
        let span = |px: f32| if px.is_finite() { (px.max(0.0) / cell).floor() as usize } else { 0 };
        let (mut cols, mut rows) = (span(width), span(height));

        if cols.checked_mul(rows).is_none_or(|len| len > MAX_CELLS) {
            warn!("{}x{} cells exceeds the grid limit, using an empty grid", cols, rows);
            (cols, rows) = (0, 0);
        }

        self.current = Grid::new(cols, rows);
        self.scratch = Grid::new(cols, rows);
        info!("grid resized to {}x{} cells ({:.0}x{:.0} px)", cols, rows, width, height);

        self.reseed();
    }

    /// Clear both buffers and write `pattern`, remembering it for later reseeds
    pub fn seed(&mut self, pattern: SeedPattern) {
        self.seed_pattern = pattern;
        self.reseed();
    }

    /// Clear both buffers and write the configured seed pattern
    pub fn reseed(&mut self) {
        self.scratch.clear();
        let rng_seed = self.random_seed.wrapping_add(self.reseeds);
        let placed = self.seed_pattern.seed(&mut self.current, rng_seed);
        self.reseeds += 1;
        self.generation = 0;
        debug!("seeded {} with {} live cells", self.seed_pattern.name(), placed);
    }

    /// Advance one generation with toroidal neighbor lookup
    pub fn step(&mut self) {
        self.algorithm.evolve(&self.current, &mut self.scratch);
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
        trace!("generation {}", self.generation);
    }

    /// Flip one cell. Out-of-bounds coordinates and empty grids are ignored.
    /// Does not render.
    pub fn toggle_cell(&mut self, col: usize, row: usize) -> bool {
        let flipped = self.current.toggle(col, row);
        if flipped {
            debug!("toggled cell ({}, {})", col, row);
        }
        flipped
    }

    /// Read-only view of the current generation
    pub fn current_state(&self) -> &Grid {
        &self.current
    }

    /// Grid dimensions as `(cols, rows)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.current.dimensions()
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn seed_pattern(&self) -> SeedPattern {
        self.seed_pattern
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        if self.running != running {
            info!("simulation {}", if running { "running" } else { "paused" });
        }
        self.running = running;
    }

    /// Toggle play/pause state
    pub fn toggle_running(&mut self) {
        self.set_running(!self.running);
    }

    /// Reseed and pause
    pub fn reset(&mut self) {
        self.reseed();
        self.set_running(false);
        info!("simulation reset");
    }

    /// Generations since the last (re)seed
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }
}
