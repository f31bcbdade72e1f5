//! Static configuration for the elevator mechanic.
//!
//! All values are fixed at process start: the binary loads them once into
//! [`LIFT_CONFIG`], and tests construct [`LiftConfig`] values directly.

use std::{fs, path::Path, sync::LazyLock};

use lift_utils::ResourceLocation;
use serde::Deserialize;
use thiserror::Error;

use crate::dimension::{DimensionId, VerticalBounds};

const DEFAULT_CONFIG: &str = include_str!("../../package-content/lift_config.json5");

const CONFIG_PATH: &str = "config/lift_config.json5";

/// The process-wide configuration, loaded on first use.
pub static LIFT_CONFIG: LazyLock<LiftConfig> = LazyLock::new(LiftConfig::load_or_create);

/// Errors raised while loading or validating a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read or written.
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid json5 or has the wrong shape.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json5::Error),
    /// The config parsed but its values are unusable.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Policy values for the elevator mechanic.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LiftConfig {
    /// Block types that act as elevators.
    pub elevator_blocks: Vec<ResourceLocation>,
    /// Dimensions scanned every tick.
    pub dimensions: Vec<DimensionId>,
    /// How many blocks a scan may travel in one direction.
    pub scan_range: u32,
    /// The world floor, shared by every dimension.
    pub min_y: i32,
    /// Build limit of the overworld.
    pub overworld_build_limit: i32,
    /// Build limit shared by the nether and the end.
    pub shared_build_limit: i32,
    /// Milliseconds between ticks of the demo host.
    pub tick_interval_ms: u64,
}

impl LiftConfig {
    /// Loads the config file, writing the bundled default first if none exists.
    ///
    /// # Panics
    /// Panics if the config directory cannot be created, or if an existing
    /// config file cannot be read, parsed, or validated.
    #[must_use]
    pub fn load_or_create() -> Self {
        let path = Path::new(CONFIG_PATH);

        if path.exists() {
            return Self::read_from(path).expect("config file is unusable");
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create config directory");
        }
        fs::write(path, DEFAULT_CONFIG).expect("failed to write default config");

        serde_json5::from_str(DEFAULT_CONFIG).expect("bundled default config is valid")
    }

    /// Reads and validates a config file.
    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_json5::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configured values can actually drive the mechanic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.elevator_blocks.is_empty() {
            return Err(ConfigError::Invalid("elevator_blocks must not be empty"));
        }
        if self.dimensions.is_empty() {
            return Err(ConfigError::Invalid("dimensions must not be empty"));
        }
        if self.scan_range == 0 {
            return Err(ConfigError::Invalid("scan_range must be at least 1"));
        }
        for dimension in &self.dimensions {
            if self.bounds_for(*dimension).build_limit <= self.min_y {
                return Err(ConfigError::Invalid("build limit must be above min_y"));
            }
        }
        Ok(())
    }

    /// The vertical bounds the scanner uses in the given dimension.
    #[must_use]
    pub fn bounds_for(&self, dimension: DimensionId) -> VerticalBounds {
        let build_limit = match dimension {
            DimensionId::Overworld => self.overworld_build_limit,
            DimensionId::Nether | DimensionId::End => self.shared_build_limit,
        };
        VerticalBounds {
            floor: self.min_y,
            build_limit,
        }
    }
}

impl Default for LiftConfig {
    fn default() -> Self {
        Self {
            elevator_blocks: vec![
                ResourceLocation::vanilla("iron_block"),
                ResourceLocation::vanilla("gold_block"),
                ResourceLocation::vanilla("diamond_block"),
                ResourceLocation::vanilla("emerald_block"),
                ResourceLocation::vanilla("lapis_block"),
                ResourceLocation::vanilla("redstone_block"),
                ResourceLocation::vanilla("netherite_block"),
            ],
            dimensions: vec![DimensionId::Overworld, DimensionId::Nether, DimensionId::End],
            scan_range: 64,
            min_y: -64,
            overworld_build_limit: 340,
            shared_build_limit: 255,
            tick_interval_ms: 50,
        }
    }
}
