use log::{debug, info};

use super::{FrameClock, LifeConfig, LifeEngine, Palette};
use crate::rendering::{self, Surface, SurfaceGeometry};

/// Visible area of the rendering surface, in logical (unscaled) pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub origin_x: f32,
    pub origin_y: f32,
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            width,
            height,
            device_pixel_ratio: 1.0,
        }
    }

    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.origin_x = x;
        self.origin_y = y;
        self
    }

    pub fn with_device_pixel_ratio(mut self, ratio: f32) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    /// Ratio used for the backing store; unusable values fall back to 1
    pub fn scale(&self) -> f32 {
        if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        }
    }

    /// Logical size for the coordinate system, backing size scaled by the DPR
    pub fn geometry(&self) -> SurfaceGeometry {
        let width = self.width.max(0.0);
        let height = self.height.max(0.0);
        let scale = self.scale();
        SurfaceGeometry {
            logical_width: width,
            logical_height: height,
            backing_width: (width * scale) as u32,
            backing_height: (height * scale) as u32,
            scale,
        }
    }

    /// Is `(x, y)` inside the logical rectangle
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.origin_x
            && y >= self.origin_y
            && x < self.origin_x + self.width
            && y < self.origin_y + self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Externally visible loop state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Not receiving frame callbacks
    Idle,
    /// Started; the next callback sets the time reference
    Armed,
    /// Ticking and advancing generations
    Running,
    /// Ticking and redrawing, generations frozen
    Paused,
}

/// What a single frame callback did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Loop is stopped; nothing happened
    Unscheduled,
    /// First callback after `start`; clock armed
    Armed,
    /// Interval not yet elapsed
    Waiting,
    /// Interval elapsed and the surface was redrawn
    Rendered { advanced: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Armed,
    Active,
}

/// Presenter drives a `LifeEngine` from display-refresh callbacks.
/// Generations advance at most once per frame interval; every tick redraws.
pub struct Presenter {
    engine: LifeEngine,
    palette: Palette,
    clock: FrameClock,
    viewport: Viewport,
    phase: Phase,
}

impl Presenter {
    pub fn new(config: &LifeConfig) -> Self {
        Self {
            engine: LifeEngine::new(config),
            palette: config.palette,
            clock: FrameClock::new(config.frame_interval_ms),
            viewport: Viewport::default(),
            phase: Phase::Idle,
        }
    }

    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn state(&self) -> LoopState {
        match self.phase {
            Phase::Idle => LoopState::Idle,
            Phase::Armed => LoopState::Armed,
            Phase::Active if self.engine.is_running() => LoopState::Running,
            Phase::Active => LoopState::Paused,
        }
    }

    /// Begin receiving frames. No effect if already started.
    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Armed;
            debug!("frame loop armed");
        }
    }

    /// Stop condition for the host's frame loop
    pub fn stop(&mut self) {
        if self.phase != Phase::Idle {
            self.phase = Phase::Idle;
            info!("frame loop stopped");
        }
    }

    /// Whether the host should keep requesting frame callbacks
    pub fn is_scheduled(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Handle one display-refresh callback at `now_ms`
    pub fn on_frame(&mut self, now_ms: f64, surface: &mut dyn Surface) -> FrameOutcome {
        match self.phase {
            Phase::Idle => FrameOutcome::Unscheduled,
            Phase::Armed => {
                self.clock.arm(now_ms);
                self.phase = Phase::Active;
                FrameOutcome::Armed
            }
            Phase::Active => {
                if !self.clock.poll(now_ms) {
                    return FrameOutcome::Waiting;
                }
                let advanced = self.engine.is_running();
                if advanced {
                    self.engine.step();
                }
                self.render(surface);
                FrameOutcome::Rendered { advanced }
            }
        }
    }

    /// Map a pointer position to a grid cell.
    /// Positions outside the surface or past the last full cell give `None`.
    pub fn pointer_to_cell(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if !self.viewport.contains(x, y) {
            return None;
        }

        let cell = self.engine.cell_size() as f32;
        let col = ((x - self.viewport.origin_x) / cell).floor();
        let row = ((y - self.viewport.origin_y) / cell).floor();
        if col < 0.0 || row < 0.0 {
            return None;
        }

        let (col, row) = (col as usize, row as usize);
        let (cols, rows) = self.engine.dimensions();
        (col < cols && row < rows).then_some((col, row))
    }

    /// Toggle the cell under the pointer and redraw at once.
    /// Returns whether a cell changed.
    pub fn handle_pointer(&mut self, x: f32, y: f32, surface: &mut dyn Surface) -> bool {
        let Some((col, row)) = self.pointer_to_cell(x, y) else {
            return false;
        };
        let toggled = self.engine.toggle_cell(col, row);
        if toggled {
            self.render(surface);
        }
        toggled
    }

    /// Apply a new viewport: rescale the backing store, resize and reseed the engine, redraw
    pub fn handle_resize(&mut self, viewport: Viewport, surface: &mut dyn Surface) {
        self.viewport = viewport;
        let geometry = viewport.geometry();
        surface.configure(geometry);
        debug!(
            "surface {}x{} logical, {}x{} backing",
            geometry.logical_width, geometry.logical_height, geometry.backing_width, geometry.backing_height
        );

        self.engine.resize(geometry.logical_width, geometry.logical_height);
        self.render(surface);
    }

    /// Flip between running and paused; returns the new running flag
    pub fn toggle_running(&mut self) -> bool {
        self.engine.toggle_running();
        self.engine.is_running()
    }

    /// Reseed, pause and redraw
    pub fn reset(&mut self, surface: &mut dyn Surface) {
        self.engine.reset();
        self.render(surface);
    }

    /// Draw the current generation
    pub fn render(&self, surface: &mut dyn Surface) {
        rendering::draw_life(
            self.engine.current_state(),
            self.engine.cell_size(),
            &self.palette,
            surface,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SeedPattern;
    use crate::rendering::DisplayList;

    fn config(seed_pattern: SeedPattern, running: bool) -> LifeConfig {
        LifeConfig {
            cell_size: 10,
            frame_interval_ms: 80,
            initial_running: running,
            seed_pattern,
            ..LifeConfig::backdrop()
        }
    }

    fn started(seed_pattern: SeedPattern, running: bool, viewport: Viewport) -> (Presenter, DisplayList) {
        let mut presenter = Presenter::new(&config(seed_pattern, running));
        let mut surface = DisplayList::new();
        presenter.handle_resize(viewport, &mut surface);
        presenter.start();
        (presenter, surface)
    }

    #[test]
    fn test_state_machine() {
        let (mut presenter, mut surface) = started(SeedPattern::Gliders, false, Viewport::new(200.0, 200.0));
        assert_eq!(presenter.state(), LoopState::Armed);
        assert_eq!(presenter.on_frame(5.0, &mut surface), FrameOutcome::Armed);
        assert_eq!(presenter.state(), LoopState::Paused);

        presenter.toggle_running();
        assert_eq!(presenter.state(), LoopState::Running);

        presenter.stop();
        assert_eq!(presenter.state(), LoopState::Idle);
        assert!(!presenter.is_scheduled());
        assert_eq!(presenter.on_frame(500.0, &mut surface), FrameOutcome::Unscheduled);
    }

    #[test]
    fn test_idle_presenter_ignores_frames() {
        let mut presenter = Presenter::new(&config(SeedPattern::Gliders, true));
        let mut surface = DisplayList::new();
        assert_eq!(presenter.on_frame(1000.0, &mut surface), FrameOutcome::Unscheduled);
        assert_eq!(surface.redraws(), 0);
    }

    #[test]
    fn test_fast_callbacks_step_at_logical_rate() {
        let (mut presenter, mut surface) = started(SeedPattern::Gliders, true, Viewport::new(300.0, 300.0));

        let frames: Vec<f64> = (0..63).map(|i| i as f64 * 16.0).collect();
        let mut stepped = 0;
        for &now in &frames {
            if let FrameOutcome::Rendered { advanced: true } = presenter.on_frame(now, &mut surface) {
                stepped += 1;
            }
        }

        let elapsed = frames[frames.len() - 1] - frames[0];
        assert!(stepped < frames.len());
        assert!(stepped as f64 <= (elapsed / 80.0).floor());
        assert_eq!(stepped, 12);
        assert_eq!(presenter.engine().generation(), 12);
    }

    #[test]
    fn test_slow_callbacks_do_not_catch_up() {
        let (mut presenter, mut surface) = started(SeedPattern::Gliders, true, Viewport::new(300.0, 300.0));
        presenter.on_frame(0.0, &mut surface);
        assert_eq!(
            presenter.on_frame(1000.0, &mut surface),
            FrameOutcome::Rendered { advanced: true }
        );
        assert_eq!(presenter.on_frame(1010.0, &mut surface), FrameOutcome::Waiting);
        assert_eq!(presenter.engine().generation(), 1);
    }

    #[test]
    fn test_paused_loop_still_redraws() {
        let (mut presenter, mut surface) = started(SeedPattern::Gliders, false, Viewport::new(300.0, 300.0));
        let before = presenter.engine().current_state().clone();
        let redraws = surface.redraws();

        presenter.on_frame(0.0, &mut surface);
        assert_eq!(presenter.on_frame(50.0, &mut surface), FrameOutcome::Waiting);
        assert_eq!(
            presenter.on_frame(100.0, &mut surface),
            FrameOutcome::Rendered { advanced: false }
        );

        assert_eq!(surface.redraws(), redraws + 1);
        assert_eq!(presenter.engine().current_state(), &before);
    }

    #[test]
    fn test_pointer_mapping_with_origin() {
        let viewport = Viewport::new(105.0, 50.0).with_origin(10.0, 20.0);
        let (presenter, _) = started(SeedPattern::Empty, false, viewport);
        assert_eq!(presenter.engine().dimensions(), (10, 5));

        assert_eq!(presenter.pointer_to_cell(15.0, 25.0), Some((0, 0)));
        assert_eq!(presenter.pointer_to_cell(109.9, 69.9), Some((9, 4)));
        // Inside the surface but in the partial column past the grid
        assert_eq!(presenter.pointer_to_cell(112.0, 25.0), None);
        // Outside the surface
        assert_eq!(presenter.pointer_to_cell(5.0, 25.0), None);
        assert_eq!(presenter.pointer_to_cell(50.0, 70.0), None);
    }

    #[test]
    fn test_pointer_toggles_and_redraws() {
        let (mut presenter, mut surface) = started(SeedPattern::Empty, false, Viewport::new(100.0, 100.0));
        let redraws = surface.redraws();

        assert!(presenter.handle_pointer(35.0, 47.0, &mut surface));
        assert_eq!(presenter.engine().population(), 1);
        assert!(presenter.engine().current_state().get(3, 4).unwrap().is_alive());
        assert_eq!(surface.redraws(), redraws + 1);

        assert!(presenter.handle_pointer(31.0, 41.0, &mut surface));
        assert_eq!(presenter.engine().population(), 0);

        assert!(!presenter.handle_pointer(-1.0, 10.0, &mut surface));
        assert_eq!(surface.redraws(), redraws + 2);
    }

    #[test]
    fn test_resize_scales_backing_store_only() {
        let viewport = Viewport::new(640.0, 480.0).with_device_pixel_ratio(2.0);
        let (presenter, surface) = started(SeedPattern::Gliders, false, viewport);

        let geometry = surface.geometry();
        assert_eq!((geometry.logical_width, geometry.logical_height), (640.0, 480.0));
        assert_eq!((geometry.backing_width, geometry.backing_height), (1280, 960));
        assert_eq!(presenter.engine().dimensions(), (64, 48));
        assert_eq!(presenter.engine().population(), 20);
    }

    #[test]
    fn test_bad_device_pixel_ratio_falls_back() {
        let viewport = Viewport::new(100.0, 100.0).with_device_pixel_ratio(f32::NAN);
        assert_eq!(viewport.scale(), 1.0);
        assert_eq!(viewport.geometry().backing_width, 100);
    }

    #[test]
    fn test_resize_keeps_clock_and_run_flag() {
        let (mut presenter, mut surface) = started(SeedPattern::Gliders, true, Viewport::new(200.0, 200.0));
        assert_eq!(presenter.on_frame(0.0, &mut surface), FrameOutcome::Armed);

        // Window resized 40ms into the interval
        presenter.handle_resize(Viewport::new(320.0, 240.0), &mut surface);
        assert!(presenter.engine().is_running());
        assert_eq!(presenter.state(), LoopState::Running);

        assert_eq!(
            presenter.on_frame(80.0, &mut surface),
            FrameOutcome::Rendered { advanced: true }
        );
        assert_eq!(presenter.engine().dimensions(), (32, 24));
        assert_eq!(presenter.engine().generation(), 1);
    }

    #[test]
    fn test_resize_after_edits_reseeds() {
        let (mut presenter, mut surface) = started(SeedPattern::Gliders, false, Viewport::new(200.0, 200.0));
        let seeded = presenter.engine().current_state().clone();
        presenter.handle_pointer(150.0, 150.0, &mut surface);

        presenter.handle_resize(Viewport::new(200.0, 200.0), &mut surface);
        assert_eq!(presenter.engine().current_state(), &seeded);
    }

    #[test]
    fn test_reset_pauses_and_redraws() {
        let (mut presenter, mut surface) = started(SeedPattern::Gliders, true, Viewport::new(200.0, 200.0));
        presenter.on_frame(0.0, &mut surface);
        presenter.on_frame(100.0, &mut surface);
        assert_eq!(presenter.engine().generation(), 1);

        let redraws = surface.redraws();
        presenter.reset(&mut surface);
        assert_eq!(presenter.state(), LoopState::Paused);
        assert_eq!(presenter.engine().generation(), 0);
        assert_eq!(surface.redraws(), redraws + 1);
    }
}
