//! Engine configuration and visual presets.

use std::fmt;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::domain::{Algorithm, SeedPattern};

/// An RGBA colour, 8 bits per channel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }
}

/// Colours used by the render routine. Pure presentation, never engine state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgba,
    pub alive: Rgba,
    pub grid_line: Rgba,
}

impl Palette {
    /// Teal cells on a near-black slate
    pub const fn teal() -> Self {
        Self {
            background: Rgba::opaque(2, 6, 23),
            alive: Rgba::opaque(20, 184, 166),
            grid_line: Rgba::new(30, 64, 175, 115),
        }
    }

    /// Amber cells on charcoal
    pub const fn amber() -> Self {
        Self {
            background: Rgba::opaque(24, 24, 27),
            alive: Rgba::opaque(245, 158, 11),
            grid_line: Rgba::new(82, 82, 91, 110),
        }
    }

    /// Violet cells on deep indigo
    pub const fn violet() -> Self {
        Self {
            background: Rgba::opaque(15, 10, 40),
            alive: Rgba::opaque(167, 139, 250),
            grid_line: Rgba::new(76, 29, 149, 100),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::teal()
    }
}

/// Everything needed to build an engine and its presentation loop
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Pixels per cell edge, at least 1
    pub cell_size: u32,
    /// Milliseconds per generation, at least 1
    pub frame_interval_ms: u32,
    pub initial_running: bool,
    pub seed_pattern: SeedPattern,
    pub palette: Palette,
    pub algorithm: Algorithm,
    /// Base seed for `SeedPattern::Random`
    pub random_seed: u64,
}

impl LifeConfig {
    /// Full-window background: small cells, paused, gliders on the left
    pub fn backdrop() -> Self {
        Self {
            cell_size: 9,
            frame_interval_ms: 80,
            initial_running: false,
            seed_pattern: SeedPattern::Gliders,
            palette: Palette::teal(),
            algorithm: Algorithm::Serial,
            random_seed: 0x5eed,
        }
    }

    /// Header banner: chunky cells, logo, starts running
    pub fn banner() -> Self {
        Self {
            cell_size: 12,
            frame_interval_ms: 100,
            initial_running: true,
            seed_pattern: SeedPattern::Logo,
            palette: Palette::amber(),
            ..Self::backdrop()
        }
    }

    /// Sidebar panel: fine cells, corner gliders, starts running
    pub fn corners() -> Self {
        Self {
            cell_size: 6,
            frame_interval_ms: 60,
            initial_running: true,
            seed_pattern: SeedPattern::CornerGliders,
            palette: Palette::violet(),
            ..Self::backdrop()
        }
    }

    /// Check the numeric invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::Invalid("cell_size must be at least 1".into()));
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "frame_interval_ms must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Parse a JSON document; missing fields take the backdrop defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: LifeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Resolve a command-line argument: a preset name, or else a JSON file path.
    /// Falls back to the backdrop preset when nothing usable is given.
    pub fn resolve(arg: Option<&str>) -> Result<Self, ConfigError> {
        match arg {
            None => Ok(Self::backdrop()),
            Some(name) => match Preset::from_name(name) {
                Some(preset) => Ok(preset.config()),
                None => Self::load(name),
            },
        }
    }

    /// Like `resolve`, but logs and recovers from errors
    pub fn resolve_or_default(arg: Option<&str>) -> Self {
        Self::resolve(arg).unwrap_or_else(|err| {
            warn!("falling back to backdrop preset: {}", err);
            Self::backdrop()
        })
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self::backdrop()
    }
}

/// Named configurations for the three places the animation is hosted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Backdrop,
    Banner,
    Corners,
}

impl Preset {
    pub fn all() -> Vec<Preset> {
        vec![Preset::Backdrop, Preset::Banner, Preset::Corners]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Backdrop => "backdrop",
            Preset::Banner => "banner",
            Preset::Corners => "corners",
        }
    }

    pub fn from_name(name: &str) -> Option<Preset> {
        Self::all()
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name))
    }

    pub fn config(&self) -> LifeConfig {
        match self {
            Preset::Backdrop => LifeConfig::backdrop(),
            Preset::Banner => LifeConfig::banner(),
            Preset::Corners => LifeConfig::corners(),
        }
    }
}

/// Errors raised while building a `LifeConfig`
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io(std::io::Error),
    /// Config file is not valid JSON for `LifeConfig`
    Parse(serde_json::Error),
    /// Values parsed but break an invariant
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "could not read config: {}", err),
            ConfigError::Parse(err) => write!(f, "could not parse config: {}", err),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for preset in Preset::all() {
            assert!(preset.config().validate().is_ok(), "{}", preset.name());
        }
    }

    #[test]
    fn test_backdrop_matches_defaults() {
        let config = LifeConfig::default();
        assert_eq!(config.cell_size, 9);
        assert_eq!(config.frame_interval_ms, 80);
        assert!(!config.initial_running);
        assert_eq!(config.seed_pattern, SeedPattern::Gliders);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config =
            LifeConfig::from_json_str(r#"{ "cell_size": 4, "seed_pattern": "corner_gliders" }"#)
                .unwrap();
        assert_eq!(config.cell_size, 4);
        assert_eq!(config.seed_pattern, SeedPattern::CornerGliders);
        assert_eq!(config.frame_interval_ms, 80);
        assert_eq!(config.palette, Palette::teal());
    }

    #[test]
    fn test_palette_json() {
        let config = LifeConfig::from_json_str(
            r#"{ "palette": { "alive": [255, 0, 0, 255] } }"#,
        )
        .unwrap();
        assert_eq!(config.palette.alive, Rgba::opaque(255, 0, 0));
        assert_eq!(config.palette.background, Palette::teal().background);
    }

    #[test]
    fn test_zero_cell_size_is_rejected() {
        let err = LifeConfig::from_json_str(r#"{ "cell_size": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let config = LifeConfig {
            frame_interval_ms: 0,
            ..LifeConfig::backdrop()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = LifeConfig::from_json_str("{ cell_size: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("could not parse config"));
    }

    #[test]
    fn test_resolve_by_preset_name() {
        assert_eq!(LifeConfig::resolve(None).unwrap(), LifeConfig::backdrop());
        assert_eq!(LifeConfig::resolve(Some("Banner")).unwrap(), LifeConfig::banner());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let missing = "/definitely/not/a/real/life-config.json";
        assert!(matches!(
            LifeConfig::resolve(Some(missing)),
            Err(ConfigError::Io(_))
        ));
        assert_eq!(LifeConfig::resolve_or_default(Some(missing)), LifeConfig::backdrop());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("life_backdrop_config_test.json");
        std::fs::write(&path, r#"{ "frame_interval_ms": 33, "initial_running": true }"#).unwrap();
        let config = LifeConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.frame_interval_ms, 33);
        assert!(config.initial_running);
    }
}
