//! Engine configuration.
//!
//! Provides configurable parameters for terrain generation, the agent start,
//! walk animation timing and the isometric view, read from a TOML file.
//!
//! ```toml
//! tile_width = 32
//! start = { x = 4, y = 7 }
//!
//! [generator]
//! size = 40
//! seed = 7        # omit for a random map each run
//!
//! [animation]
//! duration_ms = 1200
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use terrawalk_common::GridCoord;
use terrawalk_gameplay::AnimationConfig;
use terrawalk_world::GeneratorConfig;
use tracing::{info, warn};

/// Configuration file name.
pub const CONFIG_FILE: &str = "terrawalk.toml";

/// Engine configuration parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === World Settings ===
    /// Terrain generator parameters
    pub generator: GeneratorConfig,
    /// Replace `generator.seed` with a random one at startup.
    ///
    /// Set when the file names no `[generator] seed`.
    #[serde(skip)]
    pub random_seed: bool,

    // === Agent Settings ===
    /// Agent start cell (None = first walkable cell)
    pub start: Option<GridCoord>,
    /// Walk-cycle timing
    pub animation: AnimationConfig,

    // === View Settings ===
    /// Isometric tile width in pixels
    pub tile_width: u32,
    /// Isometric tile height in pixels
    pub tile_height: u32,
    /// Print draw requests after each command
    pub show_draw_requests: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            random_seed: true,

            start: None,
            animation: AnimationConfig::default(),

            tile_width: 32,
            tile_height: 32,
            show_draw_requests: false,
        }
    }
}

impl EngineConfig {
    /// Parses a config document. Absent fields keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        let table: toml::Table = text.parse()?;
        let seeded = table
            .get("generator")
            .and_then(|generator| generator.get("seed"))
            .is_some();

        let mut config: Self = toml::Value::Table(table).try_into()?;
        config.random_seed = !seeded;
        Ok(config)
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields the defaults. Unreadable or malformed files are
    /// errors so the caller can report them.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Config file {} not found, using defaults", path.display());
                return Ok(Self::default());
            },
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()));
            },
        };

        let config = Self::from_toml(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Clamp view settings to sensible ranges.
    ///
    /// Generator and animation parameters are not clamped here; the library
    /// constructors reject invalid values with an error.
    pub fn validate(&mut self) {
        self.tile_width = self.tile_width.clamp(2, 256);
        self.tile_height = self.tile_height.clamp(2, 256);
    }

    /// Generator parameters with the seed settled.
    ///
    /// With `random_seed` set every call draws a fresh seed.
    #[must_use]
    pub fn resolved_generator(&self) -> GeneratorConfig {
        let mut generator = self.generator.clone();
        if self.random_seed {
            generator.seed = fastrand::u32(..);
            info!("Using random seed {}", generator.seed);
        }
        generator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use terrawalk_world::ElevationConvention;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert!(config.random_seed);
        assert_eq!(config.generator.size, 60);
        assert_eq!(config.animation.duration_ticks(), 8);
        assert_eq!(config.tile_width, 32);
    }

    #[test]
    fn test_config_validation() {
        let mut config = EngineConfig {
            tile_width: 0,
            tile_height: 1000,
            ..Default::default()
        };
        config.validate();
        assert_eq!(config.tile_width, 2);
        assert_eq!(config.tile_height, 256);
    }

    #[test]
    fn test_config_load_from_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(
            &config_path,
            r#"
start = { x = 3, y = 4 }

[generator]
size = 20
seed = 12345
convention = "raw"

[animation]
duration_ms = 1200
"#,
        )
        .expect("write");

        let loaded = EngineConfig::load_from(&config_path).expect("valid file");
        assert!(!loaded.random_seed);
        assert_eq!(loaded.generator.size, 20);
        assert_eq!(loaded.generator.seed, 12345);
        assert_eq!(loaded.generator.convention, ElevationConvention::Raw);
        assert_eq!(loaded.start, Some(GridCoord::new(3, 4)));
        assert_eq!(loaded.animation.duration_ms, 1200);
        assert_eq!(loaded.animation.frame_count, 8);
        assert_eq!(loaded.tile_width, 32);
    }

    #[test]
    fn test_config_load_missing_file() {
        let config = EngineConfig::load_from(Path::new("/nonexistent/path/terrawalk.toml"))
            .expect("missing file is not an error");
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_config_load_malformed_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "tile_width = \"wide\"").expect("write");

        let err = EngineConfig::load_from(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse"));
    }

    #[test]
    fn test_file_seed_is_kept() {
        let config = EngineConfig::from_toml("[generator]\nseed = 99\n").expect("valid toml");
        assert!(!config.random_seed);
        assert_eq!(config.resolved_generator().seed, 99);
        assert_eq!(config.resolved_generator().seed, 99);
    }

    #[test]
    fn test_missing_seed_is_random() {
        let config = EngineConfig::from_toml("[generator]\nsize = 12\n").expect("valid toml");
        assert!(config.random_seed);
        assert_eq!(config.generator.size, 12);
        assert_eq!(config.generator.octaves, 6);
        assert_eq!(config.resolved_generator().size, 12);
    }
}
