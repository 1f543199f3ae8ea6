use macroquad::prelude::*;

use super::{DisplayList, DrawCommand};
use crate::application::Rgba;

fn to_color(rgba: Rgba) -> Color {
    let [r, g, b, a] = rgba.0;
    Color::from_rgba(r, g, b, a)
}

/// Replay the retained frame onto the macroquad window
pub fn present(list: &DisplayList) {
    for command in list.commands() {
        match *command {
            DrawCommand::Clear => clear_background(BLACK),
            DrawCommand::FillRect { x, y, width, height, color } => {
                draw_rectangle(x, y, width, height, to_color(color));
            }
            DrawCommand::Line { x1, y1, x2, y2, thickness, color } => {
                draw_line(x1, y1, x2, y2, thickness, to_color(color));
            }
        }
    }
}
