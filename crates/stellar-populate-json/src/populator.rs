//! JSON populator for generated populations.

use crate::error::JsonPopulatorError;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use stellar_core::GeneratedData;
use stellar_populate::{PopulateMetrics, EXOPLANETS_TABLE, PLANETS_TABLE, STARS_TABLE};
use tracing::{debug, info};

/// Default buffer size for JSON writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Layout of the written files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// One pretty-printed array per file
    #[default]
    Pretty,
    /// One compact object per line
    Lines,
}

impl JsonFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            JsonFormat::Pretty => "json",
            JsonFormat::Lines => "jsonl",
        }
    }
}

/// JSON populator that writes one file per entity type.
pub struct JsonPopulator {
    output_dir: PathBuf,
    format: JsonFormat,
}

impl JsonPopulator {
    /// Create a new JSON populator writing pretty-printed arrays into `output_dir`.
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
            format: JsonFormat::default(),
        }
    }

    /// Select the output layout.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn format(&self) -> JsonFormat {
        self.format
    }

    /// Path of the output file for `table`.
    pub fn file_path(&self, table: &str) -> PathBuf {
        self.output_dir.join(format!("{table}.{}", self.format.extension()))
    }

    /// Write stars, planets and exoplanets to their JSON files.
    pub fn populate(&self, data: &GeneratedData) -> Result<PopulateMetrics, JsonPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        fs::create_dir_all(&self.output_dir)?;
        info!(
            "Writing {:?} JSON files to '{}'",
            self.format,
            self.output_dir.display()
        );

        let bytes = self.write_table(STARS_TABLE, &data.stars)?;
        metrics.record_file(data.stars.len(), bytes);

        let bytes = self.write_table(PLANETS_TABLE, &data.planets)?;
        metrics.record_file(data.planets.len(), bytes);

        let bytes = self.write_table(EXOPLANETS_TABLE, &data.exoplanets)?;
        metrics.record_file(data.exoplanets.len(), bytes);

        metrics.total_duration = start_time.elapsed();

        info!(
            "JSON generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.bytes_written,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Write one table and return the resulting file size.
    fn write_table<T: Serialize>(
        &self,
        table: &str,
        rows: &[T],
    ) -> Result<u64, JsonPopulatorError> {
        let path = self.file_path(table);

        let file = File::create(&path)?;
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

        match self.format {
            JsonFormat::Pretty => {
                serde_json::to_writer_pretty(&mut writer, rows)?;
                writer.write_all(b"\n")?;
            }
            JsonFormat::Lines => {
                for row in rows {
                    serde_json::to_writer(&mut writer, row)?;
                    writer.write_all(b"\n")?;
                }
            }
        }

        writer.flush()?;
        drop(writer);

        let size = fs::metadata(&path)?.len();
        debug!("Wrote {} rows to '{}' ({} bytes)", rows.len(), path.display(), size);

        Ok(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stellar_core::{Exoplanet, Planet, Star};
    use stellar_generator::{generate_all, GenerationConfig};
    use tempfile::TempDir;

    #[test]
    fn test_file_path_extension() {
        let populator = JsonPopulator::new("out");
        assert_eq!(populator.file_path("stars"), Path::new("out/stars.json"));

        let populator = populator.with_format(JsonFormat::Lines);
        assert_eq!(populator.file_path("stars"), Path::new("out/stars.jsonl"));
    }

    #[test]
    fn test_populate_pretty_reads_back() {
        let data = generate_all(&GenerationConfig::new(10, 5, 3, 12345));
        let temp_dir = TempDir::new().unwrap();
        let populator = JsonPopulator::new(temp_dir.path());

        let metrics = populator.populate(&data).unwrap();
        assert_eq!(metrics.rows_written, data.total_rows() as u64);
        assert_eq!(metrics.files_written, 3);

        let stars: Vec<Star> =
            serde_json::from_str(&fs::read_to_string(populator.file_path("stars")).unwrap())
                .unwrap();
        let planets: Vec<Planet> =
            serde_json::from_str(&fs::read_to_string(populator.file_path("planets")).unwrap())
                .unwrap();
        let exoplanets: Vec<Exoplanet> = serde_json::from_str(
            &fs::read_to_string(populator.file_path("exoplanets")).unwrap(),
        )
        .unwrap();

        assert_eq!(stars.len(), data.stars.len());
        for (read, written) in stars.iter().zip(&data.stars) {
            assert_eq!(read.id, written.id);
            assert_eq!(read.spectral_type, written.spectral_type);
            assert!((read.mass - written.mass).abs() <= f64::EPSILON * written.mass);
        }

        assert_eq!(planets.len(), data.planets.len());
        for (read, written) in planets.iter().zip(&data.planets) {
            assert_eq!(read.star_id, written.star_id);
            assert_eq!(read.atmosphere, written.atmosphere);
            assert_eq!(read.discovery_year, written.discovery_year);
        }

        assert_eq!(exoplanets.len(), data.exoplanets.len());
        for (read, written) in exoplanets.iter().zip(&data.exoplanets) {
            assert_eq!(read.name, written.name);
            assert_eq!(read.detection_method, written.detection_method);
        }
    }

    #[test]
    fn test_populate_lines() {
        let data = generate_all(&GenerationConfig::new(6, 2, 2, 7));
        let temp_dir = TempDir::new().unwrap();
        let populator = JsonPopulator::new(temp_dir.path()).with_format(JsonFormat::Lines);

        populator.populate(&data).unwrap();

        let content = fs::read_to_string(populator.file_path("stars")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 6);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["name"], "Star-1");
        assert_eq!(first["id"], data.stars[0].id.to_string());
        assert_eq!(first["spectral_type"], data.stars[0].spectral_type.to_string());
    }

    #[test]
    fn test_empty_population_writes_empty_arrays() {
        let data = GeneratedData::default();
        let temp_dir = TempDir::new().unwrap();
        let populator = JsonPopulator::new(temp_dir.path());

        let metrics = populator.populate(&data).unwrap();
        assert_eq!(metrics.rows_written, 0);

        let content = fs::read_to_string(populator.file_path("planets")).unwrap();
        assert_eq!(content.trim(), "[]");
    }
}
