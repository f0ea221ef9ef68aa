//! CSV populator for generated populations.

use crate::error::CSVPopulatorError;
use csv::Writer;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;
use stellar_core::{Exoplanet, GeneratedData, Planet, Star};
use stellar_populate::{PopulateMetrics, EXOPLANETS_TABLE, PLANETS_TABLE, STARS_TABLE};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Column names of `stars.csv`.
pub const STAR_COLUMNS: [&str; 6] = [
    "id",
    "name",
    "spectral_type",
    "mass",
    "radius",
    "temperature",
];

/// Column names of `planets.csv`.
pub const PLANET_COLUMNS: [&str; 13] = [
    "id",
    "name",
    "orbital_period",
    "semi_major_axis",
    "eccentricity",
    "mass",
    "radius",
    "atmosphere",
    "surface_temp",
    "has_rings",
    "has_moons",
    "discovery_year",
    "star_id",
];

/// Column names of `exoplanets.csv`.
pub const EXOPLANET_COLUMNS: [&str; 12] = [
    "id",
    "name",
    "orbital_period",
    "semi_major_axis",
    "eccentricity",
    "mass",
    "radius",
    "detection_method",
    "host_distance",
    "surface_temp",
    "discovery_year",
    "star_id",
];

/// CSV populator that writes one file per entity type.
pub struct CSVPopulator {
    output_dir: PathBuf,
    include_header: bool,
}

impl CSVPopulator {
    /// Create a new CSV populator writing into `output_dir`.
    ///
    /// The directory is created on the first call to [`CSVPopulator::populate`].
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
            include_header: true,
        }
    }

    /// Set whether to include a header row in the CSV output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the CSV file for `table`.
    pub fn file_path(&self, table: &str) -> PathBuf {
        self.output_dir.join(format!("{table}.csv"))
    }

    /// Write stars, planets and exoplanets to their CSV files.
    ///
    /// # Returns
    ///
    /// Metrics about the populate operation.
    pub fn populate(&self, data: &GeneratedData) -> Result<PopulateMetrics, CSVPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        fs::create_dir_all(&self.output_dir)?;
        info!(
            "Writing CSV files to '{}' ({} stars, {} planets, {} exoplanets)",
            self.output_dir.display(),
            data.stars.len(),
            data.planets.len(),
            data.exoplanets.len()
        );

        let bytes = self.write_table(STARS_TABLE, &STAR_COLUMNS, &data.stars, star_record)?;
        metrics.record_file(data.stars.len(), bytes);

        let bytes = self.write_table(
            PLANETS_TABLE,
            &PLANET_COLUMNS,
            &data.planets,
            planet_record,
        )?;
        metrics.record_file(data.planets.len(), bytes);

        let bytes = self.write_table(
            EXOPLANETS_TABLE,
            &EXOPLANET_COLUMNS,
            &data.exoplanets,
            exoplanet_record,
        )?;
        metrics.record_file(data.exoplanets.len(), bytes);

        metrics.total_duration = start_time.elapsed();

        info!(
            "CSV generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.bytes_written,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Write one table and return the resulting file size.
    fn write_table<T>(
        &self,
        table: &str,
        columns: &[&str],
        rows: &[T],
        to_record: fn(&T) -> Vec<String>,
    ) -> Result<u64, CSVPopulatorError> {
        let path = self.file_path(table);

        let file = File::create(&path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = Writer::from_writer(buf_writer);

        if self.include_header {
            writer.write_record(columns)?;
        }

        for row in rows {
            writer.write_record(to_record(row))?;
        }

        writer.flush()?;
        drop(writer);

        let size = fs::metadata(&path)?.len();
        debug!("Wrote {} rows to '{}' ({} bytes)", rows.len(), path.display(), size);

        Ok(size)
    }
}

fn format_float(value: f64) -> String {
    format!("{value:.6}")
}

/// Convert a star to a CSV record ordered as [`STAR_COLUMNS`].
fn star_record(star: &Star) -> Vec<String> {
    vec![
        star.id.to_string(),
        star.name.clone(),
        star.spectral_type.to_string(),
        format_float(star.mass),
        format_float(star.radius),
        star.temperature.to_string(),
    ]
}

/// Convert a planet to a CSV record ordered as [`PLANET_COLUMNS`].
fn planet_record(planet: &Planet) -> Vec<String> {
    vec![
        planet.id.to_string(),
        planet.name.clone(),
        format_float(planet.orbital_period),
        format_float(planet.semi_major_axis),
        format_float(planet.eccentricity),
        format_float(planet.mass),
        format_float(planet.radius),
        planet.atmosphere.to_string(),
        planet.surface_temp.to_string(),
        planet.has_rings.to_string(),
        planet.has_moons.to_string(),
        planet.discovery_year.to_string(),
        planet.star_id.to_string(),
    ]
}

/// Convert an exoplanet to a CSV record ordered as [`EXOPLANET_COLUMNS`].
fn exoplanet_record(exoplanet: &Exoplanet) -> Vec<String> {
    vec![
        exoplanet.id.to_string(),
        exoplanet.name.clone(),
        format_float(exoplanet.orbital_period),
        format_float(exoplanet.semi_major_axis),
        format_float(exoplanet.eccentricity),
        format_float(exoplanet.mass),
        format_float(exoplanet.radius),
        exoplanet.detection_method.to_string(),
        format_float(exoplanet.host_distance),
        exoplanet.surface_temp.to_string(),
        exoplanet.discovery_year.to_string(),
        exoplanet.star_id.to_string(),
    ]
}
