//! Spectral class table and weighted class selection.
//!
//! The weights approximate the main-sequence demographics of the solar
//! neighbourhood (M dwarfs dominate, O stars are vanishingly rare). They are
//! relative frequencies and need not sum to any particular value.

use crate::generators::numeric::uniform_f64;
use rand::Rng;
use std::ops::RangeInclusive;
use stellar_core::{SpectralClass, SpectralType};

/// Physical ranges and relative frequency of one spectral class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassProfile {
    pub class: SpectralClass,
    /// Mass range in solar masses
    pub mass: (f64, f64),
    /// Radius range in solar radii
    pub radius: (f64, f64),
    /// Temperature range in Kelvin, both bounds inclusive
    pub temperature: RangeInclusive<i32>,
    pub weight: f64,
}

/// Main-sequence profiles in O→M order.
pub static SPECTRAL_TABLE: [ClassProfile; 7] = [
    ClassProfile {
        class: SpectralClass::O,
        mass: (16.0, 90.0),
        radius: (6.6, 15.0),
        temperature: 30000..=50000,
        weight: 0.00003,
    },
    ClassProfile {
        class: SpectralClass::B,
        mass: (2.1, 16.0),
        radius: (1.8, 6.6),
        temperature: 10000..=30000,
        weight: 0.13,
    },
    ClassProfile {
        class: SpectralClass::A,
        mass: (1.4, 2.1),
        radius: (1.4, 1.8),
        temperature: 7500..=10000,
        weight: 2.0,
    },
    ClassProfile {
        class: SpectralClass::F,
        mass: (1.04, 1.4),
        radius: (1.15, 1.4),
        temperature: 6000..=7500,
        weight: 3.0,
    },
    ClassProfile {
        class: SpectralClass::G,
        mass: (0.8, 1.04),
        radius: (0.96, 1.15),
        temperature: 5200..=6000,
        weight: 7.6,
    },
    ClassProfile {
        class: SpectralClass::K,
        mass: (0.45, 0.8),
        radius: (0.7, 0.96),
        temperature: 3700..=5200,
        weight: 12.1,
    },
    ClassProfile {
        class: SpectralClass::M,
        mass: (0.08, 0.45),
        radius: (0.1, 0.7),
        temperature: 2400..=3700,
        weight: 76.45,
    },
];

/// Sum of all class weights, accumulated in table order.
pub fn total_weight() -> f64 {
    SPECTRAL_TABLE.iter().map(|p| p.weight).sum()
}

/// Look up the profile of a class.
pub fn profile(class: SpectralClass) -> &'static ClassProfile {
    // Table order matches SpectralClass::ALL
    &SPECTRAL_TABLE[class as usize]
}

/// Select the class for a draw `value` in `[0, total_weight())`.
///
/// Scans the table in O→M order and returns the first class whose
/// cumulative weight is at least `value`, so a value landing exactly on a
/// boundary belongs to the earlier class.
pub fn select_class(value: f64) -> &'static ClassProfile {
    let mut cumulative = 0.0;
    for profile in &SPECTRAL_TABLE {
        cumulative += profile.weight;
        if value <= cumulative {
            return profile;
        }
    }
    &SPECTRAL_TABLE[SPECTRAL_TABLE.len() - 1]
}

/// Draw a spectral type: weighted class, uniform subclass digit, luminosity `V`.
pub fn sample_spectral_type<R: Rng>(rng: &mut R) -> (SpectralType, &'static ClassProfile) {
    let value = uniform_f64(rng, 0.0, total_weight());
    let profile = select_class(value);
    let subclass = rng.gen_range(0..10u8);
    (SpectralType::main_sequence(profile.class, subclass), profile)
}
