//! Bound planet sampler.

use crate::generators::numeric::{choose, uniform_f64, uniform_i32};
use crate::generators::uuid::generate_uuid_v4;
use crate::physics::{orbital_period_days, surface_temperature};
use crate::DISCOVERY_YEARS;
use rand::Rng;
use stellar_core::{Atmosphere, Planet, Star};

/// Semi-major axis range in AU.
pub const AXIS_RANGE_AU: (f64, f64) = (0.05, 50.0);
/// Bound planets are modelled on near-circular orbits.
pub const ECCENTRICITY_RANGE: (f64, f64) = (0.0, 0.3);
pub const RING_PROBABILITY: f64 = 0.2;
pub const MOON_PROBABILITY: f64 = 0.6;

/// Physical regime of a bound planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetRegime {
    Rocky,
    IceGiant,
    GasGiant,
}

impl PlanetRegime {
    /// Map a uniform draw in `[0, 1)` onto a regime.
    ///
    /// Cut points are 0.3 and 0.6; each band includes its lower cut point.
    pub fn from_draw(u: f64) -> Self {
        if u < 0.3 {
            PlanetRegime::Rocky
        } else if u < 0.6 {
            PlanetRegime::IceGiant
        } else {
            PlanetRegime::GasGiant
        }
    }

    /// Mass range in Earth masses.
    pub fn mass_range(self) -> (f64, f64) {
        match self {
            PlanetRegime::Rocky => (0.1, 5.0),
            PlanetRegime::IceGiant => (5.0, 20.0),
            PlanetRegime::GasGiant => (20.0, 1000.0),
        }
    }

    /// Radius range in Earth radii.
    pub fn radius_range(self) -> (f64, f64) {
        match self {
            PlanetRegime::Rocky => (0.3, 2.0),
            PlanetRegime::IceGiant => (2.0, 4.0),
            PlanetRegime::GasGiant => (4.0, 15.0),
        }
    }
}

/// Display name of a bound planet.
pub fn planet_name(star: &Star, index: usize) -> String {
    format!("{}-Planet-{index}", star.name)
}

/// Generate one planet bound to `star`.
///
/// Draw order: identifier, axis, regime, mass, radius, eccentricity,
/// atmosphere, rings, moons, discovery year. Orbital period and surface
/// temperature are derived from the axis and the parent star.
pub fn generate_planet<R: Rng>(rng: &mut R, star: &Star, index: usize) -> Planet {
    let id = generate_uuid_v4(rng);

    let semi_major_axis = uniform_f64(rng, AXIS_RANGE_AU.0, AXIS_RANGE_AU.1);
    let orbital_period = orbital_period_days(semi_major_axis, star.mass);

    let regime = PlanetRegime::from_draw(rng.gen::<f64>());
    let (mass_min, mass_max) = regime.mass_range();
    let mass = uniform_f64(rng, mass_min, mass_max);
    let (radius_min, radius_max) = regime.radius_range();
    let radius = uniform_f64(rng, radius_min, radius_max);

    let eccentricity = uniform_f64(rng, ECCENTRICITY_RANGE.0, ECCENTRICITY_RANGE.1);
    let atmosphere = choose(rng, &Atmosphere::ALL);
    let has_rings = rng.gen_bool(RING_PROBABILITY);
    let has_moons = rng.gen_bool(MOON_PROBABILITY);
    let discovery_year = uniform_i32(rng, DISCOVERY_YEARS);

    Planet {
        id,
        name: planet_name(star, index),
        orbital_period,
        semi_major_axis,
        eccentricity,
        mass,
        radius,
        atmosphere,
        surface_temp: surface_temperature(star.temperature, star.radius, semi_major_axis),
        has_rings,
        has_moons,
        discovery_year,
        star_id: star.id,
    }
}
