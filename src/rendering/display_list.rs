use super::{Surface, SurfaceGeometry};
use crate::application::Rgba;

/// One recorded drawing primitive
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgba,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        thickness: f32,
        color: Rgba,
    },
}

/// Retained surface: keeps the last frame's commands until the next `clear`,
/// the way a canvas keeps its pixels. Hosts replay it each display frame.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    geometry: SurfaceGeometry,
    commands: Vec<DrawCommand>,
    redraws: u64,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn geometry(&self) -> SurfaceGeometry {
        self.geometry
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of times the surface has been cleared for a new frame
    pub fn redraws(&self) -> u64 {
        self.redraws
    }

    /// Count filled rectangles of the given colour
    pub fn filled_cells(&self, color: Rgba) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::FillRect { color: c, .. } if *c == color))
            .count()
    }

    /// Count line commands
    pub fn lines(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Line { .. }))
            .count()
    }
}

impl Surface for DisplayList {
    fn configure(&mut self, geometry: SurfaceGeometry) {
        self.geometry = geometry;
    }

    fn logical_size(&self) -> (f32, f32) {
        (self.geometry.logical_width, self.geometry.logical_height)
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.redraws += 1;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { x, y, width, height, color });
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line { x1, y1, x2, y2, thickness, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_drops_previous_frame() {
        let mut list = DisplayList::new();
        list.fill_rect(0.0, 0.0, 1.0, 1.0, Rgba::opaque(1, 2, 3));
        list.clear();
        assert_eq!(list.commands(), &[DrawCommand::Clear]);
        assert_eq!(list.redraws(), 1);
    }

    #[test]
    fn test_configure_sets_logical_size() {
        let mut list = DisplayList::new();
        list.configure(SurfaceGeometry {
            logical_width: 300.0,
            logical_height: 200.0,
            backing_width: 600,
            backing_height: 400,
            scale: 2.0,
        });
        assert_eq!(list.logical_size(), (300.0, 200.0));
        assert_eq!(list.geometry().backing_width, 600);
    }
}
