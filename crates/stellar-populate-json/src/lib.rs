//! JSON file populator for stellargen.
//!
//! Writes a generated population either as pretty-printed JSON arrays
//! (`stars.json`, `planets.json`, `exoplanets.json`) or as JSON Lines
//! (`*.jsonl`, one compact object per line). Keys are the snake_case entity
//! field names.
//!
//! # Example
//!
//! ```ignore
//! use stellar_generator::{generate_all, GenerationConfig};
//! use stellar_populate_json::{JsonFormat, JsonPopulator};
//!
//! let data = generate_all(&GenerationConfig::new(100, 8, 5, 42));
//! let metrics = JsonPopulator::new("output")
//!     .with_format(JsonFormat::Lines)
//!     .populate(&data)?;
//! ```

pub mod args;
mod error;
mod populator;

pub use args::{CommonPopulateArgs, JsonPopulateArgs};
pub use error::JsonPopulatorError;
pub use populator::{JsonFormat, JsonPopulator};
