//! Algorithm enum for selecting how a generation is computed.
//!
//! `Serial` is the reference stepper and the default: the whole core runs on
//! the thread that owns the engine. `Parallel` exists for the benchmark and
//! for very large windows only. Both variants fill the whole scratch buffer
//! before returning, so the caller always swaps in a complete generation.

use serde::{Deserialize, Serialize};

use super::Grid;

/// Available evolution strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Cell-by-cell on the calling thread
    #[default]
    Serial,
    /// Rows spread across the rayon pool; a benchmark option, same results as `Serial`
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Short description for logs and the benchmark table
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "1 byte/cell, single thread",
            Algorithm::Parallel => "1 byte/cell, parallel rows",
        }
    }

    /// Compute the generation after `current` into `scratch`
    pub fn evolve(&self, current: &Grid, scratch: &mut Grid) {
        match self {
            Algorithm::Serial => current.evolve_into(scratch),
            Algorithm::Parallel => current.evolve_into_parallel(scratch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    #[test]
    fn test_default_is_serial() {
        assert_eq!(Algorithm::default(), Algorithm::Serial);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_variants_agree() {
        let mut grid = Grid::new(16, 9);
        for (x, y) in [(1, 1), (2, 1), (3, 1), (10, 4), (11, 5), (9, 6), (10, 6), (11, 6)] {
            grid.set(x, y, Cell::Alive);
        }

        let results: Vec<Grid> = Algorithm::all()
            .iter()
            .map(|algorithm| {
                let mut scratch = Grid::new(16, 9);
                algorithm.evolve(&grid, &mut scratch);
                scratch
            })
            .collect();
        assert_eq!(results[0], results[1]);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Algorithm::Parallel).unwrap();
        assert_eq!(json, "\"parallel\"");
    }
}
