//! Numeric value generators.

use rand::Rng;
use std::ops::RangeInclusive;

/// Generate a random float in `[min, max)`.
pub fn uniform_f64<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.gen_range(min..max)
}

/// Generate a random integer in `[min, max]`.
pub fn uniform_i32<R: Rng>(rng: &mut R, range: RangeInclusive<i32>) -> i32 {
    rng.gen_range(range)
}

/// Draw a count in `0..=cap`.
pub fn count_up_to<R: Rng>(rng: &mut R, cap: u32) -> u32 {
    rng.gen_range(0..=cap)
}

/// Pick one entry of a non-empty fixed table uniformly.
pub fn choose<R: Rng, T: Copy, const N: usize>(rng: &mut R, table: &[T; N]) -> T {
    table[rng.gen_range(0..N)]
}
