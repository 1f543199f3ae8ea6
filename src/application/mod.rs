mod config;
mod engine;
mod clock;
mod presenter;

pub use config::{ConfigError, LifeConfig, Palette, Preset, Rgba};
pub use engine::LifeEngine;
pub use clock::FrameClock;
pub use presenter::{FrameOutcome, LoopState, Presenter, Viewport};
