//! Generated entities and the result set that owns them.

use crate::descriptors::{Atmosphere, DetectionMethod};
use crate::spectral::SpectralType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A main-sequence star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub id: Uuid,
    pub name: String,
    pub spectral_type: SpectralType,
    /// Mass in solar masses
    pub mass: f64,
    /// Radius in solar radii
    pub radius: f64,
    /// Surface temperature in Kelvin
    pub temperature: i32,
}

/// A planet bound to one of the generated stars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub id: Uuid,
    pub name: String,
    /// Orbital period in Earth days
    pub orbital_period: f64,
    /// Semi-major axis in AU
    pub semi_major_axis: f64,
    /// Orbital eccentricity in `[0, 1)`
    pub eccentricity: f64,
    /// Mass in Earth masses
    pub mass: f64,
    /// Radius in Earth radii
    pub radius: f64,
    pub atmosphere: Atmosphere,
    /// Equilibrium surface temperature in Kelvin
    pub surface_temp: i32,
    pub has_rings: bool,
    pub has_moons: bool,
    pub discovery_year: i32,
    /// Parent star identifier
    pub star_id: Uuid,
}

/// An exoplanet detected around one of the generated stars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exoplanet {
    pub id: Uuid,
    pub name: String,
    /// Orbital period in Earth days
    pub orbital_period: f64,
    /// Semi-major axis in AU
    pub semi_major_axis: f64,
    /// Orbital eccentricity in `[0, 1)`
    pub eccentricity: f64,
    /// Mass in Earth masses
    pub mass: f64,
    /// Radius in Earth radii
    pub radius: f64,
    pub detection_method: DetectionMethod,
    /// Distance from the observer to the host star in light-years
    pub host_distance: f64,
    /// Equilibrium surface temperature in Kelvin
    pub surface_temp: i32,
    pub discovery_year: i32,
    /// Parent star identifier
    pub star_id: Uuid,
}

/// One star together with everything generated for it.
#[derive(Debug, Clone, PartialEq)]
pub struct StarSystem {
    pub star: Star,
    pub planets: Vec<Planet>,
    pub exoplanets: Vec<Exoplanet>,
}

/// Complete result of a generation run.
///
/// Entities are stored in star-major order: the planets of star N come
/// before the planets of star N+1, and likewise for exoplanets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedData {
    pub stars: Vec<Star>,
    pub planets: Vec<Planet>,
    pub exoplanets: Vec<Exoplanet>,
}

impl GeneratedData {
    /// Create an empty result set with room for `star_count` stars.
    pub fn with_capacity(star_count: usize) -> Self {
        Self {
            stars: Vec::with_capacity(star_count),
            planets: Vec::new(),
            exoplanets: Vec::new(),
        }
    }

    /// Append a star system, keeping star-major order.
    pub fn push_system(&mut self, system: StarSystem) {
        self.stars.push(system.star);
        self.planets.extend(system.planets);
        self.exoplanets.extend(system.exoplanets);
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty() && self.planets.is_empty() && self.exoplanets.is_empty()
    }

    /// Total number of entities across all three sequences.
    pub fn total_rows(&self) -> usize {
        self.stars.len() + self.planets.len() + self.exoplanets.len()
    }

    /// Find a star by identifier.
    pub fn star(&self, id: &Uuid) -> Option<&Star> {
        self.stars.iter().find(|star| &star.id == id)
    }

    /// Planets bound to the given star.
    pub fn planets_of<'a>(&'a self, star_id: &'a Uuid) -> impl Iterator<Item = &'a Planet> + 'a {
        self.planets.iter().filter(move |p| &p.star_id == star_id)
    }

    /// Exoplanets orbiting the given star.
    pub fn exoplanets_of<'a>(
        &'a self,
        star_id: &'a Uuid,
    ) -> impl Iterator<Item = &'a Exoplanet> + 'a {
        self.exoplanets.iter().filter(move |e| &e.star_id == star_id)
    }
}

impl FromIterator<StarSystem> for GeneratedData {
    fn from_iter<I: IntoIterator<Item = StarSystem>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut data = GeneratedData::with_capacity(iter.size_hint().0);
        for system in iter {
            data.push_system(system);
        }
        data
    }
}
