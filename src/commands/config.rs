//! Config command handlers.

use anyhow::Context;
use std::path::Path;
use stellar_populate::{CommonPopulateArgs, PopulationSettings};

/// Write a settings template with the default values to `output`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn run_config_init(output: &Path, force: bool) -> anyhow::Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "Settings file {} already exists (use --force to overwrite)",
            output.display()
        );
    }

    PopulationSettings::default()
        .save(output)
        .with_context(|| format!("Failed to write settings template to {output:?}"))?;

    tracing::info!("Wrote settings template to {}", output.display());
    Ok(())
}

/// Resolve settings from defaults, the settings file and flags, and render
/// them as YAML.
///
/// A zero seed is shown as configured: each generate run replaces it with
/// its own wall-clock seed, which it logs.
pub fn run_config_show(common: &CommonPopulateArgs) -> anyhow::Result<String> {
    let settings = common
        .load_settings()
        .context("Failed to resolve settings")?
        .normalize_with_seed(|| 0);

    let mut yaml = settings.to_yaml().context("Failed to render settings")?;
    if settings.seed == 0 {
        yaml.push_str("# seed 0 is replaced by the wall clock when generating\n");
    }
    Ok(yaml)
}
