//! Derived physical quantities.
//!
//! These are pure functions of already-sampled values. They are never
//! re-drawn: an orbital period or surface temperature that disagrees with
//! its inputs would break both reproducibility and physical consistency.

/// Days in a Julian year.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Orbital period in days from Kepler's third law.
///
/// With the semi-major axis in AU and the central mass in solar masses,
/// `P[years]² = a³ / M`.
pub fn orbital_period_days(semi_major_axis_au: f64, star_mass_solar: f64) -> f64 {
    let a = semi_major_axis_au;
    DAYS_PER_YEAR * (a * a * a / star_mass_solar).sqrt()
}

/// Equilibrium surface temperature in Kelvin, truncated toward zero.
///
/// `T = T_star * sqrt(R_star / 2a)`. Albedo, atmosphere and eccentricity
/// are ignored; the units of `R_star` (solar radii) and `a` (AU) are mixed
/// on purpose and must stay that way.
pub fn surface_temperature(
    star_temperature: i32,
    star_radius: f64,
    semi_major_axis_au: f64,
) -> i32 {
    (f64::from(star_temperature) * (star_radius / (2.0 * semi_major_axis_au)).sqrt()) as i32
}
