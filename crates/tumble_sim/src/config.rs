//! Simulation configuration
//!
//! Loaded from TOML; every section and field is optional and falls back to
//! the values of the stock scene.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tumble_physics::PhysicsConfig;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tumble.toml";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values the simulation cannot run with
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Complete simulation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub audio: AudioConfig,
    pub spawn: SpawnConfig,
    pub frame: FrameConfig,
}

/// Impact sound settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Impacts must be strictly faster than this to be heard
    pub impact_threshold: f32,
    /// Clip to play on impact; silent when absent
    pub clip: Option<PathBuf>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            impact_threshold: 1.5,
            clip: None,
        }
    }
}

/// Placement of spawned bodies
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// RNG seed; drawn from the OS when absent
    pub seed: Option<u64>,
    /// Height of the temporary spawn position `(0, spawn_height, 0)`
    pub spawn_height: f32,
    /// Debug sphere radius range `[min, max)`
    pub sphere_radius: [f32; 2],
    /// Debug sphere x range `[min, max)`
    pub sphere_x: [f32; 2],
    pub sphere_y: f32,
    /// Debug box dimensions (width, height, depth)
    pub box_size: [f32; 3],
    /// Debug boxes land within `[-extent/2, extent/2)` on x and z
    pub box_extent: f32,
    pub box_y: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            seed: None,
            spawn_height: 3.0,
            sphere_radius: [0.1, 2.0],
            sphere_x: [1.0, 2.0],
            sphere_y: 3.0,
            box_size: [1.0, 1.5, 2.0],
            box_extent: 3.0,
            box_y: 3.0,
        }
    }
}

/// Headless frame pacing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub target_fps: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self { target_fps: 60 }
    }
}

impl SimulationConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from all sources:
    /// 1. `TUMBLE_CONFIG`, or `tumble.toml` if present, or built-in defaults
    /// 2. environment overrides
    pub fn discover() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os("TUMBLE_CONFIG") {
            Some(path) => Self::load(PathBuf::from(path))?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::load(DEFAULT_CONFIG_FILE)?,
            None => {
                log::info!("Using built-in config");
                Self::default()
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply `TUMBLE_*` overrides read through `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(seed) = lookup("TUMBLE_SEED") {
            match seed.trim().parse() {
                Ok(seed) => {
                    self.spawn.seed = Some(seed);
                    log::info!("Spawn seed from env: {}", seed);
                }
                Err(_) => log::warn!("Ignoring unparsable TUMBLE_SEED {:?}", seed),
            }
        }
    }

    /// Check the values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        let range_ok = |r: [f32; 2]| r[0].is_finite() && r[1].is_finite() && r[0] < r[1];

        if !(range_ok(self.spawn.sphere_radius) && self.spawn.sphere_radius[0] > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "sphere_radius must be a positive range, got {:?}",
                self.spawn.sphere_radius
            )));
        }
        if !range_ok(self.spawn.sphere_x) {
            return Err(ConfigError::Invalid(format!(
                "sphere_x must be a non-empty range, got {:?}",
                self.spawn.sphere_x
            )));
        }
        if self.spawn.box_size.iter().any(|s| !(s.is_finite() && *s > 0.0)) {
            return Err(ConfigError::Invalid(format!(
                "box_size must be positive, got {:?}",
                self.spawn.box_size
            )));
        }
        let finite = [
            self.spawn.spawn_height,
            self.spawn.sphere_y,
            self.spawn.box_extent,
            self.spawn.box_y,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::Invalid("spawn positions must be finite".to_string()));
        }
        if !(self.audio.impact_threshold.is_finite() && self.audio.impact_threshold >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "impact_threshold must be non-negative, got {}",
                self.audio.impact_threshold
            )));
        }
        if self.frame.target_fps == 0 {
            return Err(ConfigError::Invalid("target_fps must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_scene() {
        let config = SimulationConfig::default();
        assert_eq!(config.audio.impact_threshold, 1.5);
        assert_eq!(config.spawn.spawn_height, 3.0);
        assert_eq!(config.spawn.box_size, [1.0, 1.5, 2.0]);
        assert_eq!(config.frame.target_fps, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = SimulationConfig::from_toml_str(
            r#"
            [physics]
            gravity = [0.0, -9.81, 0.0]

            [spawn]
            seed = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.physics.gravity, [0.0, -9.81, 0.0]);
        assert_eq!(config.physics.max_substeps, 3);
        assert_eq!(config.spawn.seed, Some(7));
        assert_eq!(config.spawn.sphere_x, [1.0, 2.0]);
        assert!(config.audio.clip.is_none());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            SimulationConfig::from_toml_str("[spawn]\nsphere_radius = [0.0, 2.0]"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SimulationConfig::from_toml_str("[physics]\ntimestep = 0.0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SimulationConfig::from_toml_str("[physics]\nmax_substeps = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SimulationConfig::from_toml_str("[frame]\ntarget_fps = \"fast\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("tumble-config-does-not-exist.toml");
        assert!(matches!(SimulationConfig::load(&path), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_seed_override() {
        let mut config = SimulationConfig::default();
        config.apply_overrides(|key| (key == "TUMBLE_SEED").then(|| "42".to_string()));
        assert_eq!(config.spawn.seed, Some(42));

        config.apply_overrides(|_| Some("not a number".to_string()));
        assert_eq!(config.spawn.seed, Some(42));
    }
}
