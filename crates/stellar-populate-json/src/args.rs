//! CLI argument definitions for the JSON populator.

use clap::Args;
use std::path::PathBuf;

// Re-export CommonPopulateArgs for convenience
pub use stellar_populate::CommonPopulateArgs;

/// JSON-specific populate arguments.
#[derive(Args, Clone, Debug)]
pub struct JsonPopulateArgs {
    /// Output directory for JSON files (one file per entity)
    #[arg(long, short = 'o', default_value = "output")]
    pub output_dir: PathBuf,

    /// Write JSON Lines (`.jsonl`, one object per line) instead of pretty-printed arrays
    #[arg(long)]
    pub lines: bool,

    #[command(flatten)]
    pub common: CommonPopulateArgs,
}
