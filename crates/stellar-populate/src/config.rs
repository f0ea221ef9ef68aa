//! Population settings loaded from YAML.
//!
//! Settings are resolved in three layers: built-in defaults, then an
//! optional YAML file, then CLI flags. [`PopulationSettings::normalize`]
//! applies the limits the generation engine relies on.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use stellar_generator::GenerationConfig;
use tracing::warn;

/// Upper limit on bound planets per star.
pub const MAX_PLANETS_PER_STAR: u32 = 15;
/// Upper limit on exoplanets per star.
pub const MAX_EXOPLANETS_PER_STAR: u32 = 8;

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading or writing a settings file
    #[error("Failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing or serializing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Settings for one generation run.
///
/// ```yaml
/// num_stars: 100
/// planets_per_star: 8
/// exoplanets_per_star: 5
/// seed: 0   # 0 derives the seed from the wall clock
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PopulationSettings {
    /// Number of stars to generate
    pub num_stars: usize,
    /// Maximum planets per star
    pub planets_per_star: u32,
    /// Maximum exoplanets per star
    pub exoplanets_per_star: u32,
    /// Random seed (0 means time-based). Negative seeds are accepted and
    /// reinterpreted bit for bit as the engine's unsigned seed.
    pub seed: i64,
}

impl Default for PopulationSettings {
    fn default() -> Self {
        Self {
            num_stars: 100,
            planets_per_star: 8,
            exoplanets_per_star: 5,
            seed: 0,
        }
    }
}

impl PopulationSettings {
    /// Load settings from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string. Missing keys take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize settings to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write settings to a YAML file, e.g. as a template for later runs.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    /// Apply limits and resolve the seed, using the wall clock for a zero seed.
    pub fn normalize(self) -> Self {
        self.normalize_with_seed(wall_clock_seed)
    }

    /// Apply limits and resolve a zero seed with `seed_source`.
    ///
    /// - at least one star is generated
    /// - planet and exoplanet caps are clamped to their maxima
    pub fn normalize_with_seed<F: FnOnce() -> i64>(mut self, seed_source: F) -> Self {
        if self.num_stars < 1 {
            warn!("num_stars must be at least 1, using 1");
            self.num_stars = 1;
        }
        if self.planets_per_star > MAX_PLANETS_PER_STAR {
            warn!(
                "planets_per_star {} exceeds maximum, clamping to {}",
                self.planets_per_star, MAX_PLANETS_PER_STAR
            );
            self.planets_per_star = MAX_PLANETS_PER_STAR;
        }
        if self.exoplanets_per_star > MAX_EXOPLANETS_PER_STAR {
            warn!(
                "exoplanets_per_star {} exceeds maximum, clamping to {}",
                self.exoplanets_per_star, MAX_EXOPLANETS_PER_STAR
            );
            self.exoplanets_per_star = MAX_EXOPLANETS_PER_STAR;
        }
        if self.seed == 0 {
            self.seed = seed_source();
        }
        self
    }

    /// Engine input for these settings.
    pub fn to_generation_config(&self) -> GenerationConfig {
        GenerationConfig::new(
            self.num_stars,
            self.planets_per_star,
            self.exoplanets_per_star,
            self.seed as u64,
        )
    }
}

/// Seed derived from the current UNIX time in nanoseconds.
///
/// Never returns 0, so a resolved seed is always distinguishable from
/// "not yet resolved".
pub fn wall_clock_seed() -> i64 {
    chrono::Utc::now()
        .timestamp_nanos_opt()
        .filter(|nanos| *nanos != 0)
        .unwrap_or(1)
}
