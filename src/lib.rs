// Domain layer - grid, rule and seed patterns
pub mod domain;

// Application layer - engine, config and the frame loop
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Grid, Pattern, SeedPattern, presets};
pub use application::{LifeConfig, LifeEngine, Presenter, Viewport};
pub use rendering::{DisplayList, Surface};
