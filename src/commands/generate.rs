//! Generate command handlers.

use anyhow::Context;
use std::time::{Duration, Instant};
use stellar_core::GeneratedData;
use stellar_generator::generate_all;
use stellar_populate::{CommonPopulateArgs, PopulateMetrics, PopulationSettings};
use stellar_populate_csv::{CSVPopulateArgs, CSVPopulator};
use stellar_populate_json::{JsonFormat, JsonPopulateArgs, JsonPopulator};

/// Outcome of one generate command.
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    /// Settings after defaults, file, flags and normalization were applied
    pub settings: PopulationSettings,
    pub stars: usize,
    pub planets: usize,
    pub exoplanets: usize,
    pub generation_duration: Duration,
    /// `None` in dry-run mode
    pub metrics: Option<PopulateMetrics>,
}

/// Resolve settings and generate the population.
fn generate(common: &CommonPopulateArgs) -> anyhow::Result<(GeneratedData, GenerateSummary)> {
    let settings = common
        .resolve_settings()
        .context("Failed to resolve generation settings")?;

    tracing::info!(
        "Generating {} stars (planets per star <= {}, exoplanets per star <= {}, seed={})",
        settings.num_stars,
        settings.planets_per_star,
        settings.exoplanets_per_star,
        settings.seed
    );

    let start = Instant::now();
    let data = generate_all(&settings.to_generation_config());
    let generation_duration = start.elapsed();

    tracing::info!(
        "Generated {} stars, {} planets, {} exoplanets in {:?}",
        data.stars.len(),
        data.planets.len(),
        data.exoplanets.len(),
        generation_duration
    );

    let summary = GenerateSummary {
        stars: data.stars.len(),
        planets: data.planets.len(),
        exoplanets: data.exoplanets.len(),
        settings,
        generation_duration,
        metrics: None,
    };

    Ok((data, summary))
}

/// Generate a population and write it as CSV files.
pub fn run_generate_csv(args: &CSVPopulateArgs) -> anyhow::Result<GenerateSummary> {
    let (data, mut summary) = generate(&args.common)?;

    if args.common.dry_run {
        tracing::info!("Dry run mode - no output written");
        return Ok(summary);
    }

    let metrics = CSVPopulator::new(&args.output_dir)
        .with_header(!args.no_header)
        .populate(&data)
        .with_context(|| format!("Failed to write CSV files to {:?}", args.output_dir))?;

    summary.metrics = Some(metrics);
    Ok(summary)
}

/// Generate a population and write it as JSON or JSON Lines files.
pub fn run_generate_json(args: &JsonPopulateArgs) -> anyhow::Result<GenerateSummary> {
    let (data, mut summary) = generate(&args.common)?;

    if args.common.dry_run {
        tracing::info!("Dry run mode - no output written");
        return Ok(summary);
    }

    let format = if args.lines {
        JsonFormat::Lines
    } else {
        JsonFormat::Pretty
    };

    let metrics = JsonPopulator::new(&args.output_dir)
        .with_format(format)
        .populate(&data)
        .with_context(|| format!("Failed to write JSON files to {:?}", args.output_dir))?;

    summary.metrics = Some(metrics);
    Ok(summary)
}
