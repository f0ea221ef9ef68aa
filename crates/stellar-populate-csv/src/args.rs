//! CLI argument definitions for the CSV populator.

use clap::Args;
use std::path::PathBuf;

// Re-export CommonPopulateArgs for convenience
pub use stellar_populate::CommonPopulateArgs;

/// CSV-specific populate arguments.
#[derive(Args, Clone, Debug)]
pub struct CSVPopulateArgs {
    /// Output directory for CSV files (one file per entity)
    #[arg(long, short = 'o', default_value = "output")]
    pub output_dir: PathBuf,

    /// Omit the header row
    #[arg(long)]
    pub no_header: bool,

    #[command(flatten)]
    pub common: CommonPopulateArgs,
}
