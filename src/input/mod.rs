use log::debug;
use macroquad::prelude::*;

use crate::application::{Presenter, Viewport};
use crate::rendering::Surface;
use crate::ui::{self, Button, ControlAction};

/// Current window as a viewport
pub fn current_viewport() -> Viewport {
    Viewport::new(screen_width(), screen_height()).with_device_pixel_ratio(screen_dpi_scale())
}

/// Stand-in for a resize subscription: report the window size when it differs from `known`
pub fn poll_resize(known: Viewport) -> Option<Viewport> {
    let current = current_viewport();
    (current != known).then_some(current)
}

/// Apply a control action
pub fn apply_control(presenter: &mut Presenter, action: ControlAction, surface: &mut dyn Surface) {
    match action {
        ControlAction::ToggleRunning => {
            presenter.toggle_running();
        }
        ControlAction::Reset => presenter.reset(surface),
    }
}

/// Route a left click: controls swallow it, anything else toggles a cell
pub fn process_pointer(presenter: &mut Presenter, buttons: &[Button], surface: &mut dyn Surface) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }

    let mouse_pos = mouse_position();
    match ui::hit_test(buttons, mouse_pos) {
        Some(action) => {
            debug!("control {:?} clicked", action);
            apply_control(presenter, action, surface);
        }
        None => {
            presenter.handle_pointer(mouse_pos.0, mouse_pos.1, surface);
        }
    }
}

/// Keyboard shortcuts: Space play/pause, R reset, Escape quit
pub fn process_keyboard(presenter: &mut Presenter, surface: &mut dyn Surface) {
    let actions = [
        (KeyCode::Space, ControlAction::ToggleRunning),
        (KeyCode::R, ControlAction::Reset),
    ];

    for (key, action) in actions {
        if is_key_pressed(key) {
            apply_control(presenter, action, surface);
        }
    }

    if is_key_pressed(KeyCode::Escape) {
        presenter.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{LifeConfig, LoopState};
    use crate::rendering::DisplayList;

    #[test]
    fn test_controls_drive_presenter() {
        let mut presenter = Presenter::new(&LifeConfig::backdrop());
        let mut surface = DisplayList::new();
        presenter.handle_resize(Viewport::new(300.0, 300.0), &mut surface);
        presenter.start();
        presenter.on_frame(0.0, &mut surface);

        apply_control(&mut presenter, ControlAction::ToggleRunning, &mut surface);
        assert_eq!(presenter.state(), LoopState::Running);

        let redraws = surface.redraws();
        apply_control(&mut presenter, ControlAction::Reset, &mut surface);
        assert_eq!(presenter.state(), LoopState::Paused);
        assert_eq!(surface.redraws(), redraws + 1);
    }
}
