//! stellargen library
//!
//! Generates reproducible synthetic populations of stars, bound planets and
//! exoplanets for load tests and analytics fixtures.
//!
//! # Crates
//!
//! - `stellar_core` - Entity types and the `GeneratedData` result set
//! - `stellar_generator` - The seeded generation engine
//! - `stellar_populate` - Settings, shared CLI arguments and metrics
//! - `stellar_populate_csv` / `stellar_populate_json` - Output writers
//!
//! # CLI Usage
//!
//! ```bash
//! # 1000 stars as CSV with a fixed seed
//! stellargen generate csv --output-dir output --num-stars 1000 --seed 42
//!
//! # JSON Lines using a settings file
//! stellargen generate json --lines --config stellargen.yaml
//!
//! # Write a settings template
//! stellargen config init --output stellargen.yaml
//! ```

pub mod commands;

// Re-export the engine and writers for convenience
pub use stellar_core as model;
pub use stellar_generator as generator;
pub use stellar_populate_csv as csv;
pub use stellar_populate_json as json;

pub use commands::generate::{run_generate_csv, run_generate_json, GenerateSummary};
