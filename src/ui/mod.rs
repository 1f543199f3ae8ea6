mod button;

pub use button::{Button, ControlAction};

pub const BUTTON_WIDTH: f32 = 96.0;
pub const BUTTON_HEIGHT: f32 = 32.0;
pub const MARGIN: f32 = 16.0;

/// Play/pause label read from the engine's running flag
pub fn run_label(running: bool) -> &'static str {
    if running { "Pause" } else { "Play" }
}

/// Controls laid out along the bottom-right corner of a `screen_width` × `screen_height` window
pub fn create_controls(screen_width: f32, screen_height: f32, running: bool) -> Vec<Button> {
    let y = screen_height - MARGIN - BUTTON_HEIGHT;
    let reset_x = screen_width - MARGIN - BUTTON_WIDTH;
    let toggle_x = reset_x - MARGIN / 2.0 - BUTTON_WIDTH;
    vec![
        Button::new(toggle_x, y, BUTTON_WIDTH, BUTTON_HEIGHT, run_label(running), ControlAction::ToggleRunning),
        Button::new(reset_x, y, BUTTON_WIDTH, BUTTON_HEIGHT, "Reset", ControlAction::Reset),
    ]
}

/// The control under the pointer, if any
pub fn hit_test(buttons: &[Button], mouse_pos: (f32, f32)) -> Option<ControlAction> {
    buttons
        .iter()
        .find(|button| button.is_hovered(mouse_pos))
        .map(Button::action)
}
