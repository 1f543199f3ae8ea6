mod display_list;
pub mod screen;

pub use display_list::{DisplayList, DrawCommand};

use crate::application::{Palette, Rgba};
use crate::domain::Grid;

/// Width of the grid separator lines
pub const GRID_LINE_WIDTH: f32 = 1.0;

/// Size of the drawing surface: logical coordinates stay unscaled,
/// the backing store is multiplied by the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SurfaceGeometry {
    pub logical_width: f32,
    pub logical_height: f32,
    pub backing_width: u32,
    pub backing_height: u32,
    pub scale: f32,
}

/// A 2D target exposing the few primitives the render routine needs
pub trait Surface {
    /// Adopt new dimensions
    fn configure(&mut self, geometry: SurfaceGeometry);

    /// Logical `(width, height)`
    fn logical_size(&self) -> (f32, f32);

    /// Wipe everything drawn so far
    fn clear(&mut self);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba);

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: Rgba);
}

/// Draw one generation: background, an inset square per live cell, then grid lines.
/// Reads the grid only.
pub fn draw_life(grid: &Grid, cell_size: u32, palette: &Palette, surface: &mut dyn Surface) {
    let (width, height) = surface.logical_size();
    surface.clear();
    surface.fill_rect(0.0, 0.0, width, height, palette.background);

    if grid.is_empty() {
        return;
    }

    let cell = cell_size as f32;
    let inset = cell - 2.0;
    // Cells of 2px or less would have nothing left after the inset
    if inset > 0.0 {
        for (col, row) in grid.iter_alive() {
            surface.fill_rect(
                col as f32 * cell + 1.0,
                row as f32 * cell + 1.0,
                inset,
                inset,
                palette.alive,
            );
        }
    }

    let (cols, rows) = grid.dimensions();
    let grid_width = cols as f32 * cell;
    let grid_height = rows as f32 * cell;

    // Half-pixel offset keeps 1px lines crisp
    for col in 0..=cols {
        let x = col as f32 * cell + 0.5;
        surface.stroke_line(x, 0.0, x, grid_height, GRID_LINE_WIDTH, palette.grid_line);
    }
    for row in 0..=rows {
        let y = row as f32 * cell + 0.5;
        surface.stroke_line(0.0, y, grid_width, y, GRID_LINE_WIDTH, palette.grid_line);
    }
}
