//! Command-line interface for stellargen
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # CSV files (stars.csv, planets.csv, exoplanets.csv)
//! stellargen generate csv \
//!   --output-dir output \
//!   --num-stars 1000 --planets-per-star 8 --exo-per-star 5 \
//!   --seed 42
//!
//! # Pretty-printed JSON arrays, settings from a file
//! stellargen generate json --output-dir output --config stellargen.yaml
//!
//! # JSON Lines, count only
//! stellargen generate json --lines --num-stars 10 --dry-run
//! ```
//!
//! ## Settings
//! ```bash
//! # Write a template with the defaults
//! stellargen config init --output stellargen.yaml
//!
//! # Print the resolved settings
//! stellargen config show --config stellargen.yaml --seed 7
//! ```
//!
//! A seed of 0 (the default) derives the seed from the wall clock; the
//! resolved seed is logged so the run can be reproduced.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stellar_populate::CommonPopulateArgs;
use stellar_populate_csv::CSVPopulateArgs;
use stellar_populate_json::JsonPopulateArgs;
use stellargen::commands::config::{run_config_init, run_config_show};
use stellargen::{run_generate_csv, run_generate_json, GenerateSummary};

#[derive(Parser)]
#[command(name = "stellargen")]
#[command(about = "Synthetic stellar data generator for load tests and analytics fixtures")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a stellar population and write it out
    Generate {
        #[command(subcommand)]
        target: GenerateTarget,
    },

    /// Manage settings files
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Output format of the generated population
#[derive(Subcommand)]
enum GenerateTarget {
    /// Write CSV files
    #[command(name = "csv")]
    Csv {
        #[command(flatten)]
        args: CSVPopulateArgs,
    },
    /// Write JSON or JSON Lines files
    #[command(name = "json")]
    Json {
        #[command(flatten)]
        args: JsonPopulateArgs,
    },
}

/// Settings subcommands
#[derive(Subcommand)]
enum ConfigCommand {
    /// Write a settings template with the default values
    Init {
        /// Path of the settings file to write
        #[arg(long, short = 'o', default_value = "stellargen.yaml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the resolved settings; a zero seed is resolved per generate run
    Show {
        #[command(flatten)]
        common: CommonPopulateArgs,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { target } => {
            let summary = match target {
                GenerateTarget::Csv { args } => run_generate_csv(&args)?,
                GenerateTarget::Json { args } => run_generate_json(&args)?,
            };
            log_summary(&summary);
        }
        Commands::Config { command } => match command {
            ConfigCommand::Init { output, force } => run_config_init(&output, force)?,
            ConfigCommand::Show { common } => print!("{}", run_config_show(&common)?),
        },
    }

    Ok(())
}

fn log_summary(summary: &GenerateSummary) {
    match &summary.metrics {
        Some(metrics) => tracing::info!(
            "Done: {} stars, {} planets, {} exoplanets (seed={}); wrote {} files, {} bytes in {:?}",
            summary.stars,
            summary.planets,
            summary.exoplanets,
            summary.settings.seed,
            metrics.files_written,
            metrics.bytes_written,
            metrics.total_duration
        ),
        None => tracing::info!(
            "Done: {} stars, {} planets, {} exoplanets (seed={}); nothing written",
            summary.stars,
            summary.planets,
            summary.exoplanets,
            summary.settings.seed
        ),
    }
}
