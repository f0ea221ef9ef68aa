//! Star sampler.

use crate::generators::numeric::{uniform_f64, uniform_i32};
use crate::generators::uuid::generate_uuid_v4;
use crate::spectral::sample_spectral_type;
use rand::Rng;
use stellar_core::Star;

/// Display name of the star with the given 1-based ordinal.
pub fn star_name(index: usize) -> String {
    format!("Star-{index}")
}

/// Generate one star.
///
/// Draw order: identifier, spectral class, subclass, mass, radius,
/// temperature. Mass and radius are uniform within the class range and the
/// temperature is a uniform integer over the inclusive class range.
pub fn generate_star<R: Rng>(rng: &mut R, index: usize) -> Star {
    let id = generate_uuid_v4(rng);
    let (spectral_type, profile) = sample_spectral_type(rng);

    let mass = uniform_f64(rng, profile.mass.0, profile.mass.1);
    let radius = uniform_f64(rng, profile.radius.0, profile.radius.1);
    let temperature = uniform_i32(rng, profile.temperature.clone());

    Star {
        id,
        name: star_name(index),
        spectral_type,
        mass,
        radius,
        temperature,
    }
}
