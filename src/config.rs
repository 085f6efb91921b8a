use std::fs;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::Grid;

pub const CONFIG_PATH: &str = "snake_config.json";
pub const DEFAULT_TICK_RATE: u32 = 15;
pub const DEFAULT_LOG_PATH: &str = "./logging.log";

/// Window and UI presets. The game shipped in two sizes that differ only in
/// these numbers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Classic,
    Compact,
}

/// Pixel measurements for one [`Layout`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Metrics {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
    pub font_size: u16,
    pub button_width: f32,
    pub button_height: f32,
    pub button_spacing: f32,
}

impl Layout {
    pub fn metrics(self) -> Metrics {
        match self {
            Layout::Classic => Metrics {
                width: 800,
                height: 600,
                cell_size: 20,
                font_size: 35,
                button_width: 200.0,
                button_height: 50.0,
                button_spacing: 50.0,
            },
            Layout::Compact => Metrics {
                width: 640,
                height: 480,
                cell_size: 20,
                font_size: 28,
                button_width: 160.0,
                button_height: 44.0,
                button_spacing: 40.0,
            },
        }
    }

    pub fn grid(self) -> Grid {
        let m = self.metrics();
        Grid::new(m.width, m.height, m.cell_size)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: Layout,
    /// Simulation steps per second.
    pub tick_rate: u32,
    pub log_path: PathBuf,
    pub log_level: LevelFilter,
    /// Fixed RNG seed for a repeatable food sequence.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            tick_rate: DEFAULT_TICK_RATE,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            log_level: LevelFilter::Info,
            seed: None,
        }
    }
}

impl Config {
    /// Reads the config at `path`. A missing file is not an error and yields
    /// the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::InvalidTickRate(self.tick_rate));
        }
        Ok(())
    }

    pub fn metrics(&self) -> Metrics {
        self.layout.metrics()
    }

    pub fn grid(&self) -> Grid {
        self.layout.grid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_build() {
        let config = Config::default();
        assert_eq!(config.layout, Layout::Classic);
        assert_eq!(config.tick_rate, 15);
        assert_eq!(config.log_path, PathBuf::from("./logging.log"));
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.grid(), Grid::new(800, 600, 20));
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = Config::from_json(r#"{ "layout": "compact", "seed": 42 }"#).unwrap();
        assert_eq!(config.layout, Layout::Compact);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.tick_rate, DEFAULT_TICK_RATE);
        assert_eq!(config.grid(), Grid::new(640, 480, 20));
    }

    #[test]
    fn level_names_parse() {
        let config = Config::from_json(r#"{ "log_level": "warn" }"#).unwrap();
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let err = Config::from_json(r#"{ "tick_rate": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTickRate(0)));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = Config::from_json("{ layout: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let err = Config::from_json(r#"{ "layout": "huge" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join(CONFIG_PATH)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_PATH);
        fs::write(&path, r#"{ "tick_rate": 10, "log_path": "game.log" }"#).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.tick_rate, 10);
        assert_eq!(config.log_path, PathBuf::from("game.log"));
    }

    #[test]
    fn layouts_fill_the_window_with_whole_cells() {
        for layout in [Layout::Classic, Layout::Compact] {
            let m = layout.metrics();
            assert_eq!(m.width % m.cell_size, 0);
            assert_eq!(m.height % m.cell_size, 0);
        }
    }
}
