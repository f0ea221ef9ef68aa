//! CSV file populator for stellargen.
//!
//! Writes a generated population as three CSV files, `stars.csv`,
//! `planets.csv` and `exoplanets.csv`, with snake_case headers matching the
//! entity field names.
//!
//! # Example
//!
//! ```ignore
//! use stellar_generator::{generate_all, GenerationConfig};
//! use stellar_populate_csv::CSVPopulator;
//!
//! let data = generate_all(&GenerationConfig::new(100, 8, 5, 42));
//! let metrics = CSVPopulator::new("output").populate(&data)?;
//! ```

pub mod args;
mod error;
mod populator;

pub use args::{CSVPopulateArgs, CommonPopulateArgs};
pub use error::CSVPopulatorError;
pub use populator::{CSVPopulator, EXOPLANET_COLUMNS, PLANET_COLUMNS, STAR_COLUMNS};
