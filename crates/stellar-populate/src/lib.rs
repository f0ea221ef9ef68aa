//! Common types and utilities for stellargen populators.
//!
//! This crate provides the pieces shared by every output writer
//! (CSV, JSON):
//!
//! - [`CommonPopulateArgs`] - CLI arguments flattened into each writer's subcommand
//! - [`PopulationSettings`] - YAML settings with defaults, clamping and seed resolution
//! - [`PopulateMetrics`] - Row/byte counters reported after writing

pub mod args;
pub mod config;
pub mod metrics;

pub use args::CommonPopulateArgs;
pub use config::{
    wall_clock_seed, ConfigError, PopulationSettings, MAX_EXOPLANETS_PER_STAR,
    MAX_PLANETS_PER_STAR,
};
pub use metrics::PopulateMetrics;

/// Output table for stars; writers name their files after it.
pub const STARS_TABLE: &str = "stars";
/// Output table for bound planets.
pub const PLANETS_TABLE: &str = "planets";
/// Output table for exoplanets.
pub const EXOPLANETS_TABLE: &str = "exoplanets";
