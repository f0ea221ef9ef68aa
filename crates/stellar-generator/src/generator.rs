//! Population assembler producing complete star systems.

use crate::exoplanet::generate_exoplanet;
use crate::generators::numeric::count_up_to;
use crate::planet::generate_planet;
use crate::star::generate_star;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use stellar_core::{GeneratedData, StarSystem};
use tracing::debug;

/// Engine input.
///
/// Values are taken as given: clamping caps and resolving a zero seed is the
/// job of the configuration layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Number of stars to generate
    pub star_count: usize,
    /// Maximum number of bound planets per star (inclusive)
    pub planets_per_star: u32,
    /// Maximum number of exoplanets per star (inclusive)
    pub exoplanets_per_star: u32,
    /// Seed for the random stream
    pub seed: u64,
}

impl GenerationConfig {
    pub fn new(
        star_count: usize,
        planets_per_star: u32,
        exoplanets_per_star: u32,
        seed: u64,
    ) -> Self {
        Self {
            star_count,
            planets_per_star,
            exoplanets_per_star,
            seed,
        }
    }

    /// Upper bound on the number of planets in one run.
    pub fn max_planets(&self) -> usize {
        self.star_count.saturating_mul(self.planets_per_star as usize)
    }

    /// Upper bound on the number of exoplanets in one run.
    pub fn max_exoplanets(&self) -> usize {
        self.star_count.saturating_mul(self.exoplanets_per_star as usize)
    }
}

/// Generate one star followed by its planets and then its exoplanets.
///
/// Counts are drawn uniformly in `0..=cap` right before the entities they
/// count, so the stream is consumed in the order star, planet count,
/// planets, exoplanet count, exoplanets.
pub fn generate_system<R: Rng>(
    rng: &mut R,
    index: usize,
    planets_per_star: u32,
    exoplanets_per_star: u32,
) -> StarSystem {
    let star = generate_star(rng, index);

    let planet_count = count_up_to(rng, planets_per_star) as usize;
    let planets = (1..=planet_count)
        .map(|ordinal| generate_planet(rng, &star, ordinal))
        .collect();

    let exoplanet_count = count_up_to(rng, exoplanets_per_star) as usize;
    let exoplanets = (1..=exoplanet_count)
        .map(|ordinal| generate_exoplanet(rng, &star, ordinal))
        .collect();

    StarSystem {
        star,
        planets,
        exoplanets,
    }
}

/// Generator that produces a stellar population one star system at a time.
///
/// The generator owns the single random stream for the run. Systems must be
/// produced in order; there is no way to jump to an arbitrary star because
/// every draw depends on all draws before it.
pub struct PopulationGenerator<R = StdRng> {
    config: GenerationConfig,
    rng: R,
    /// Number of stars generated so far
    index: usize,
}

impl PopulationGenerator<StdRng> {
    /// Create a generator whose stream is seeded from `config.seed`.
    pub fn new(config: GenerationConfig) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(config.seed))
    }
}

impl<R: Rng> PopulationGenerator<R> {
    /// Create a generator drawing from a caller-supplied stream.
    ///
    /// `config.seed` is ignored in this case.
    pub fn with_rng(config: GenerationConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            index: 0,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Number of star systems generated so far.
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Number of star systems still to generate.
    pub fn remaining(&self) -> usize {
        self.config.star_count - self.index
    }

    /// Generate the next star system, or `None` once `star_count` is reached.
    pub fn next_system(&mut self) -> Option<StarSystem> {
        if self.index >= self.config.star_count {
            return None;
        }

        self.index += 1;
        let system = generate_system(
            &mut self.rng,
            self.index,
            self.config.planets_per_star,
            self.config.exoplanets_per_star,
        );

        debug!(
            "Generated {} ({}) with {} planets and {} exoplanets",
            system.star.name,
            system.star.spectral_type,
            system.planets.len(),
            system.exoplanets.len()
        );

        Some(system)
    }

    /// Lazily iterate over the remaining star systems.
    pub fn systems(&mut self) -> StarSystemIterator<'_, R> {
        StarSystemIterator { generator: self }
    }

    /// Generate every remaining star system into one result set.
    pub fn generate_all(mut self) -> GeneratedData {
        let mut data = GeneratedData::with_capacity(self.remaining());
        while let Some(system) = self.next_system() {
            data.push_system(system);
        }
        data
    }
}

/// Iterator that lazily generates star systems.
pub struct StarSystemIterator<'a, R> {
    generator: &'a mut PopulationGenerator<R>,
}

impl<R: Rng> Iterator for StarSystemIterator<'_, R> {
    type Item = StarSystem;

    fn next(&mut self) -> Option<Self::Item> {
        self.generator.next_system()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.generator.remaining();
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for StarSystemIterator<'_, R> {}

/// Generate a complete population from `config`.
pub fn generate_all(config: &GenerationConfig) -> GeneratedData {
    debug!(
        "Generating {} stars (planets <= {}, exoplanets <= {}, seed={})",
        config.star_count, config.planets_per_star, config.exoplanets_per_star, config.seed
    );

    let data = PopulationGenerator::new(*config).generate_all();

    debug!(
        "Generated {} stars, {} planets, {} exoplanets",
        data.stars.len(),
        data.planets.len(),
        data.exoplanets.len()
    );

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::orbital_period_days;
    use std::collections::HashSet;

    #[test]
    fn test_basic_cardinality() {
        let config = GenerationConfig::new(10, 5, 3, 12345);
        let data = generate_all(&config);

        assert_eq!(data.stars.len(), 10);
        assert!(data.planets.len() <= config.max_planets());
        assert!(data.exoplanets.len() <= config.max_exoplanets());
    }

    #[test]
    fn test_deterministic_generation() {
        let config = GenerationConfig::new(25, 6, 4, 99999);

        let first = generate_all(&config);
        let second = generate_all(&config);

        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = generate_all(&GenerationConfig::new(5, 3, 2, 1));
        let second = generate_all(&GenerationConfig::new(5, 3, 2, 2));

        assert_ne!(first.stars[0].id, second.stars[0].id);
    }

    #[test]
    fn test_zero_caps() {
        let data = generate_all(&GenerationConfig::new(1, 0, 0, 7));

        assert_eq!(data.stars.len(), 1);
        assert!(data.planets.is_empty());
        assert!(data.exoplanets.is_empty());
    }

    #[test]
    fn test_zero_stars() {
        let data = generate_all(&GenerationConfig::new(0, 5, 5, 7));
        assert!(data.is_empty());
    }

    #[test]
    fn test_star_major_order() {
        let data = generate_all(&GenerationConfig::new(20, 4, 4, 314));

        let star_pos = |id: &uuid::Uuid| data.stars.iter().position(|s| &s.id == id).unwrap();

        let planet_positions: Vec<usize> =
            data.planets.iter().map(|p| star_pos(&p.star_id)).collect();
        assert!(planet_positions.windows(2).all(|w| w[0] <= w[1]));

        let exo_positions: Vec<usize> =
            data.exoplanets.iter().map(|e| star_pos(&e.star_id)).collect();
        assert!(exo_positions.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_ordinals_restart_per_star() {
        let data = generate_all(&GenerationConfig::new(10, 5, 3, 8));

        for star in &data.stars {
            for (i, planet) in data.planets_of(&star.id).enumerate() {
                assert_eq!(planet.name, format!("{}-Planet-{}", star.name, i + 1));
            }
            for (i, exo) in data.exoplanets_of(&star.id).enumerate() {
                assert_eq!(exo.name, format!("{}-Exo-{}", star.name, i + 1));
            }
        }
    }

    #[test]
    fn test_referential_integrity_and_kepler() {
        let data = generate_all(&GenerationConfig::new(50, 8, 5, 2024));
        let ids: HashSet<_> = data.stars.iter().map(|s| s.id).collect();

        for planet in &data.planets {
            assert!(ids.contains(&planet.star_id));
            let star = data.star(&planet.star_id).unwrap();
            let expected = orbital_period_days(planet.semi_major_axis, star.mass);
            assert!((planet.orbital_period - expected).abs() <= 1e-9 * expected);
        }
        for exo in &data.exoplanets {
            assert!(ids.contains(&exo.star_id));
        }
    }

    #[test]
    fn test_iterator_matches_generate_all() {
        let config = GenerationConfig::new(12, 4, 2, 55);

        let mut generator = PopulationGenerator::new(config);
        let systems = generator.systems();
        assert_eq!(systems.len(), 12);
        let streamed: GeneratedData = systems.collect();

        assert_eq!(streamed, generate_all(&config));
        assert_eq!(generator.current_index(), 12);
        assert_eq!(generator.remaining(), 0);
        assert!(generator.next_system().is_none());
    }

    #[test]
    fn test_with_rng_uses_supplied_stream() {
        let config = GenerationConfig::new(3, 2, 2, 0);

        let a = PopulationGenerator::with_rng(config, StdRng::seed_from_u64(77)).generate_all();
        let b = generate_all(&GenerationConfig { seed: 77, ..config });

        assert_eq!(a, b);
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-12 * expected.abs(),
            "{actual} != {expected}"
        );
    }

    #[test]
    fn test_stream_consumed_star_then_planets_then_exoplanets() {
        let config = GenerationConfig::new(8, 5, 3, 12345);

        let mut rng = StdRng::seed_from_u64(12345);
        let mut expected = GeneratedData::default();
        for index in 1..=8 {
            let star = generate_star(&mut rng, index);
            let planet_count = count_up_to(&mut rng, 5) as usize;
            let planets: Vec<_> = (1..=planet_count)
                .map(|ordinal| generate_planet(&mut rng, &star, ordinal))
                .collect();
            let exoplanet_count = count_up_to(&mut rng, 3) as usize;
            let exoplanets: Vec<_> = (1..=exoplanet_count)
                .map(|ordinal| generate_exoplanet(&mut rng, &star, ordinal))
                .collect();

            expected.stars.push(star);
            expected.planets.extend(planets);
            expected.exoplanets.extend(exoplanets);
        }

        assert_eq!(generate_all(&config), expected);
    }

    #[test]
    fn test_seed_12345_known_values() {
        use stellar_core::{Atmosphere, DetectionMethod};

        let data = generate_all(&GenerationConfig::new(3, 5, 3, 12345));

        let star = &data.stars[0];
        assert_eq!(star.id.to_string(), "56d15d88-2694-414e-8b54-42ee9edd13e2");
        assert_eq!(star.name, "Star-1");
        assert_eq!(star.spectral_type.to_string(), "M6V");
        assert_close(star.mass, 0.30975275274002617);
        assert_close(star.radius, 0.4857699233728098);
        assert_eq!(star.temperature, 3525);

        // Star-1 draws zero planets and two exoplanets
        assert_eq!(data.planets_of(&star.id).count(), 0);
        assert_eq!(data.exoplanets_of(&star.id).count(), 2);

        let exoplanet = &data.exoplanets[0];
        assert_eq!(exoplanet.id.to_string(), "e6dbfabe-9355-4b3c-b7ac-732dc14c2c86");
        assert_eq!(exoplanet.name, "Star-1-Exo-1");
        assert_close(exoplanet.semi_major_axis, 1.1499531253339421);
        assert_close(exoplanet.orbital_period, 809.2875217799044);
        assert_close(exoplanet.mass, 284.37990837927055);
        assert_close(exoplanet.radius, 7.730741092237456);
        assert_close(exoplanet.host_distance, 5350.524482889203);
        assert_close(exoplanet.eccentricity, 0.00023872564225468906);
        assert_eq!(
            exoplanet.detection_method,
            DetectionMethod::TransitTimingVariation
        );
        assert_eq!(exoplanet.discovery_year, 2000);
        assert_eq!(exoplanet.surface_temp, 1620);

        let planet = &data.planets[0];
        assert_eq!(planet.id.to_string(), "9ffd6aea-a84f-4249-bf7a-9e2c89b77bf1");
        assert_eq!(planet.name, "Star-2-Planet-1");
        assert_eq!(planet.star_id, data.stars[1].id);
        assert_close(planet.semi_major_axis, 6.191785055112146);
        assert_close(planet.orbital_period, 12044.046187845446);
        assert_close(planet.mass, 4.868001892181774);
        assert_close(planet.radius, 0.49889793762102874);
        assert_close(planet.eccentricity, 0.2723272826092636);
        assert_eq!(planet.atmosphere, Atmosphere::HydrogenHelium);
        assert!(!planet.has_rings);
        assert!(planet.has_moons);
        assert_eq!(planet.discovery_year, 2008);
        assert_eq!(planet.surface_temp, 642);

        let flags: Vec<_> = data
            .planets_of(&data.stars[1].id)
            .map(|p| (p.has_rings, p.has_moons))
            .collect();
        assert_eq!(
            flags,
            [(false, true), (false, true), (false, false), (true, true), (false, true)]
        );
    }

    #[test]
    fn test_config_yaml_roundtrip_shape() {
        let config: GenerationConfig = serde_yaml::from_str(
            "star_count: 3\nplanets_per_star: 2\nexoplanets_per_star: 1\nseed: 9\n",
        )
        .unwrap();
        assert_eq!(config, GenerationConfig::new(3, 2, 1, 9));
    }
}
