//! Core data model for the stellargen synthetic data generator.
//!
//! This crate provides the entity types shared by the generation engine and
//! every serializer:
//!
//! - [`Star`] - A main-sequence star with its spectral type and physical properties
//! - [`Planet`] - A bound planet orbiting a generated star
//! - [`Exoplanet`] - A detected exoplanet orbiting a generated star
//! - [`GeneratedData`] - The complete, referentially-consistent result set
//! - [`StarSystem`] - One star together with its planets and exoplanets
//!
//! # Architecture
//!
//! ```text
//! stellar-core (this crate)
//!    │
//!    ├─── stellar-generator      (produces GeneratedData from a seed)
//!    │
//!    ├─── stellar-populate-csv   (writes one CSV file per entity)
//!    └─── stellar-populate-json  (writes JSON arrays or JSON Lines)
//! ```
//!
//! Field names, units and ranges are fixed here because downstream schemas
//! (CSV headers, JSON keys) are derived from this shape field-for-field.

pub mod descriptors;
pub mod entities;
pub mod spectral;

// Re-exports for convenience
pub use descriptors::{Atmosphere, DetectionMethod};
pub use entities::{Exoplanet, GeneratedData, Planet, Star, StarSystem};
pub use spectral::{LuminosityClass, SpectralClass, SpectralType, SpectralTypeError};
