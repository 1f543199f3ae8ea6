mod cell;
mod grid;
mod patterns;
mod algorithm;

pub use cell::Cell;
pub use grid::Grid;
pub use patterns::{Pattern, SeedPattern, glider_count, presets};
pub use algorithm::Algorithm;
