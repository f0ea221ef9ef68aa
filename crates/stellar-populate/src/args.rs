//! Common CLI argument definitions shared by all populators.

use crate::config::{ConfigError, PopulationSettings};
use clap::Args;
use std::path::PathBuf;

/// Common arguments shared by all populators.
///
/// Every flag is optional so that a settings file passed with `--config`
/// can supply the value; flags given on the command line win over the file.
#[derive(Args, Clone, Debug, Default)]
pub struct CommonPopulateArgs {
    /// Path to a YAML settings file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Number of stars to generate [default: 100]
    #[arg(long)]
    pub num_stars: Option<usize>,

    /// Maximum planets per star, at most 15 [default: 8]
    #[arg(long)]
    pub planets_per_star: Option<u32>,

    /// Maximum exoplanets per star, at most 8 [default: 5]
    #[arg(long = "exo-per-star")]
    pub exoplanets_per_star: Option<u32>,

    /// Random seed for deterministic generation (0 = time-based)
    #[arg(long, env = "STELLARGEN_SEED", allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Dry-run mode: generate and report counts without writing output
    #[arg(long)]
    pub dry_run: bool,
}

impl CommonPopulateArgs {
    /// Settings before normalization: defaults, then the settings file,
    /// then command-line overrides.
    pub fn load_settings(&self) -> Result<PopulationSettings, ConfigError> {
        let mut settings = match &self.config {
            Some(path) => PopulationSettings::from_file(path)?,
            None => PopulationSettings::default(),
        };

        if let Some(num_stars) = self.num_stars {
            settings.num_stars = num_stars;
        }
        if let Some(planets_per_star) = self.planets_per_star {
            settings.planets_per_star = planets_per_star;
        }
        if let Some(exoplanets_per_star) = self.exoplanets_per_star {
            settings.exoplanets_per_star = exoplanets_per_star;
        }
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }

        Ok(settings)
    }

    /// Fully resolved settings, ready to hand to the generator.
    pub fn resolve_settings(&self) -> Result<PopulationSettings, ConfigError> {
        Ok(self.load_settings()?.normalize())
    }
}
