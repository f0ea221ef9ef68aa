//! Deterministic stellar population generator.
//!
//! This crate is the generation engine of stellargen. It samples stars from
//! weighted spectral-class demographics, attaches bound planets and
//! exoplanets to each star, and derives orbital periods and surface
//! temperatures analytically from the sampled values. A single seeded random
//! stream is threaded through every draw, so the same configuration always
//! yields the same population, identifiers included.
//!
//! # Architecture
//!
//! ```text
//! GenerationConfig { star_count, planets_per_star, exoplanets_per_star, seed }
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │ PopulationGenerator  │
//! │                      │
//! │  - config            │
//! │  - rng (StdRng)      │
//! │  - index             │
//! └──────────┬───────────┘
//!            │  per star, in order:
//!            │    generate_star → planet count → generate_planet × n
//!            │                  → exoplanet count → generate_exoplanet × m
//!            ▼
//!   StarSystem { star, planets, exoplanets }  ──collect──▶  GeneratedData
//! ```
//!
//! # Example
//!
//! ```rust
//! use stellar_generator::{generate_all, GenerationConfig};
//!
//! let config = GenerationConfig::new(10, 5, 3, 12345);
//! let data = generate_all(&config);
//!
//! assert_eq!(data.stars.len(), 10);
//! assert!(data.planets.len() <= 50);
//! assert!(data.exoplanets.len() <= 30);
//! ```
//!
//! # Reproducibility
//!
//! The draw order is part of the contract: star → its planets → its
//! exoplanets → next star. Changing the order of any draw changes every value
//! that follows it. Generation is strictly sequential for the same reason.

use std::ops::RangeInclusive;

pub mod exoplanet;
pub mod generator;
pub mod generators;
pub mod physics;
pub mod planet;
pub mod spectral;
pub mod star;

/// Discovery years assigned to planets and exoplanets.
pub const DISCOVERY_YEARS: RangeInclusive<i32> = 1990..=2024;

// Re-exports for convenience
pub use exoplanet::generate_exoplanet;
pub use generator::{
    generate_all, generate_system, GenerationConfig, PopulationGenerator, StarSystemIterator,
};
pub use planet::{generate_planet, PlanetRegime};
pub use star::generate_star;
