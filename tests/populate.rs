//! Command handlers writing populations to disk.

use std::path::{Path, PathBuf};
use stellar_populate::{CommonPopulateArgs, PopulationSettings};
use stellargen::csv::{CSVPopulateArgs, EXOPLANET_COLUMNS, PLANET_COLUMNS, STAR_COLUMNS};
use stellargen::json::JsonPopulateArgs;
use stellargen::model::{Exoplanet, Planet, Star};
use stellargen::{run_generate_csv, run_generate_json};
use tempfile::TempDir;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/stellargen.yaml")
}

fn fixture_args() -> CommonPopulateArgs {
    CommonPopulateArgs {
        config: Some(fixture_path()),
        ..Default::default()
    }
}

fn read_csv(path: &Path) -> (Vec<String>, Vec<csv::StringRecord>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader.headers().unwrap().iter().map(String::from).collect();
    let records = reader.records().map(|r| r.unwrap()).collect();
    (headers, records)
}

#[test]
fn test_fixture_settings() {
    let settings = PopulationSettings::from_file(fixture_path()).unwrap();

    assert_eq!(settings.num_stars, 12);
    assert_eq!(settings.planets_per_star, 4);
    assert_eq!(settings.exoplanets_per_star, 2);
    assert_eq!(settings.seed, 2024);
}

#[test]
fn test_cli_flags_override_fixture() {
    let args = CommonPopulateArgs {
        num_stars: Some(3),
        ..fixture_args()
    };

    let settings = args.resolve_settings().unwrap();
    assert_eq!(settings.num_stars, 3);
    assert_eq!(settings.planets_per_star, 4);
    assert_eq!(settings.seed, 2024);
}

#[test]
fn test_generate_csv_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let args = CSVPopulateArgs {
        output_dir: temp_dir.path().to_path_buf(),
        no_header: false,
        common: fixture_args(),
    };

    let summary = run_generate_csv(&args).unwrap();
    assert_eq!(summary.stars, 12);

    let (headers, stars) = read_csv(&temp_dir.path().join("stars.csv"));
    assert_eq!(headers, STAR_COLUMNS);
    assert_eq!(stars.len(), 12);
    assert_eq!(&stars[0][1], "Star-1");

    let star_ids: Vec<&str> = stars.iter().map(|r| r.get(0).unwrap()).collect();

    let (headers, planets) = read_csv(&temp_dir.path().join("planets.csv"));
    assert_eq!(headers, PLANET_COLUMNS);
    assert_eq!(planets.len(), summary.planets);
    for planet in &planets {
        assert!(star_ids.contains(&&planet[12]));
        assert!(planet[9].parse::<bool>().is_ok());
    }

    let (headers, exoplanets) = read_csv(&temp_dir.path().join("exoplanets.csv"));
    assert_eq!(headers, EXOPLANET_COLUMNS);
    assert_eq!(exoplanets.len(), summary.exoplanets);
    for exoplanet in &exoplanets {
        assert!(star_ids.contains(&&exoplanet[11]));
    }
}

#[test]
fn test_csv_and_json_describe_same_population() {
    let temp_dir = TempDir::new().unwrap();
    let csv_args = CSVPopulateArgs {
        output_dir: temp_dir.path().join("csv"),
        no_header: false,
        common: fixture_args(),
    };
    let json_args = JsonPopulateArgs {
        output_dir: temp_dir.path().join("json"),
        lines: false,
        common: fixture_args(),
    };

    run_generate_csv(&csv_args).unwrap();
    run_generate_json(&json_args).unwrap();

    let (_, star_rows) = read_csv(&csv_args.output_dir.join("stars.csv"));
    let stars: Vec<Star> = serde_json::from_str(
        &std::fs::read_to_string(json_args.output_dir.join("stars.json")).unwrap(),
    )
    .unwrap();

    assert_eq!(star_rows.len(), stars.len());
    for (row, star) in star_rows.iter().zip(&stars) {
        assert_eq!(&row[0], star.id.to_string());
        assert_eq!(&row[2], star.spectral_type.to_string());
        assert_eq!(&row[5], star.temperature.to_string());
    }

    let planets: Vec<Planet> = serde_json::from_str(
        &std::fs::read_to_string(json_args.output_dir.join("planets.json")).unwrap(),
    )
    .unwrap();
    let (_, planet_rows) = read_csv(&csv_args.output_dir.join("planets.csv"));
    assert_eq!(planet_rows.len(), planets.len());
    for (row, planet) in planet_rows.iter().zip(&planets) {
        assert_eq!(&row[1], planet.name);
        assert_eq!(&row[7], planet.atmosphere.as_str());
    }

    let exoplanets: Vec<Exoplanet> = serde_json::from_str(
        &std::fs::read_to_string(json_args.output_dir.join("exoplanets.json")).unwrap(),
    )
    .unwrap();
    let (_, exoplanet_rows) = read_csv(&csv_args.output_dir.join("exoplanets.csv"));
    assert_eq!(exoplanet_rows.len(), exoplanets.len());
    for (row, exoplanet) in exoplanet_rows.iter().zip(&exoplanets) {
        assert_eq!(&row[7], exoplanet.detection_method.as_str());
    }
}

#[test]
fn test_missing_settings_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let args = JsonPopulateArgs {
        output_dir: temp_dir.path().to_path_buf(),
        lines: true,
        common: CommonPopulateArgs {
            config: Some(temp_dir.path().join("missing.yaml")),
            ..Default::default()
        },
    };

    let err = run_generate_json(&args).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to resolve generation settings"));
}
