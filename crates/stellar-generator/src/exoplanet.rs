//! Exoplanet sampler.
//!
//! Exoplanets follow a detection-biased distribution: tighter orbits than
//! bound planets, a single broad mass/radius range and more eccentric orbits.

use crate::generators::numeric::{choose, uniform_f64, uniform_i32};
use crate::generators::uuid::generate_uuid_v4;
use crate::physics::{orbital_period_days, surface_temperature};
use crate::DISCOVERY_YEARS;
use rand::Rng;
use stellar_core::{DetectionMethod, Exoplanet, Star};

/// Semi-major axis range in AU.
pub const AXIS_RANGE_AU: (f64, f64) = (0.01, 5.0);
/// Mass range in Earth masses.
pub const MASS_RANGE: (f64, f64) = (0.5, 500.0);
/// Radius range in Earth radii.
pub const RADIUS_RANGE: (f64, f64) = (0.5, 12.0);
pub const ECCENTRICITY_RANGE: (f64, f64) = (0.0, 0.5);
/// Distance from the observer in light-years.
pub const HOST_DISTANCE_RANGE_LY: (f64, f64) = (10.0, 10000.0);

/// Display name of an exoplanet.
pub fn exoplanet_name(star: &Star, index: usize) -> String {
    format!("{}-Exo-{index}", star.name)
}

/// Generate one exoplanet around `star`.
///
/// Draw order: identifier, axis, mass, radius, host distance, eccentricity,
/// detection method, discovery year.
pub fn generate_exoplanet<R: Rng>(rng: &mut R, star: &Star, index: usize) -> Exoplanet {
    let id = generate_uuid_v4(rng);

    let semi_major_axis = uniform_f64(rng, AXIS_RANGE_AU.0, AXIS_RANGE_AU.1);
    let orbital_period = orbital_period_days(semi_major_axis, star.mass);

    let mass = uniform_f64(rng, MASS_RANGE.0, MASS_RANGE.1);
    let radius = uniform_f64(rng, RADIUS_RANGE.0, RADIUS_RANGE.1);
    let host_distance = uniform_f64(rng, HOST_DISTANCE_RANGE_LY.0, HOST_DISTANCE_RANGE_LY.1);

    let eccentricity = uniform_f64(rng, ECCENTRICITY_RANGE.0, ECCENTRICITY_RANGE.1);
    let detection_method = choose(rng, &DetectionMethod::ALL);
    let discovery_year = uniform_i32(rng, DISCOVERY_YEARS);

    Exoplanet {
        id,
        name: exoplanet_name(star, index),
        orbital_period,
        semi_major_axis,
        eccentricity,
        mass,
        radius,
        detection_method,
        host_distance,
        surface_temp: surface_temperature(star.temperature, star.radius, semi_major_axis),
        discovery_year,
        star_id: star.id,
    }
}
