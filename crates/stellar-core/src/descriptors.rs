//! Enumerated planet descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Atmospheric composition of a bound planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Atmosphere {
    /// Gas-giant-like
    #[serde(rename = "H2/He dominant")]
    HydrogenHelium,
    /// Earth-like
    #[serde(rename = "N2/O2 dominant")]
    NitrogenOxygen,
    /// Venus-like
    #[serde(rename = "CO2 dominant")]
    CarbonDioxide,
    #[serde(rename = "Thin atmosphere")]
    Thin,
    #[serde(rename = "No atmosphere")]
    Airless,
    #[serde(rename = "H2/He with methane")]
    MethaneRich,
    #[serde(rename = "Sulfuric compounds")]
    Sulfuric,
    #[serde(rename = "Water vapor rich")]
    WaterVapor,
}

impl Atmosphere {
    pub const ALL: [Atmosphere; 8] = [
        Atmosphere::HydrogenHelium,
        Atmosphere::NitrogenOxygen,
        Atmosphere::CarbonDioxide,
        Atmosphere::Thin,
        Atmosphere::Airless,
        Atmosphere::MethaneRich,
        Atmosphere::Sulfuric,
        Atmosphere::WaterVapor,
    ];

    /// Human-readable descriptor, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Atmosphere::HydrogenHelium => "H2/He dominant",
            Atmosphere::NitrogenOxygen => "N2/O2 dominant",
            Atmosphere::CarbonDioxide => "CO2 dominant",
            Atmosphere::Thin => "Thin atmosphere",
            Atmosphere::Airless => "No atmosphere",
            Atmosphere::MethaneRich => "H2/He with methane",
            Atmosphere::Sulfuric => "Sulfuric compounds",
            Atmosphere::WaterVapor => "Water vapor rich",
        }
    }
}

impl fmt::Display for Atmosphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Method by which an exoplanet was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetectionMethod {
    #[serde(rename = "Transit")]
    Transit,
    #[serde(rename = "Radial Velocity")]
    RadialVelocity,
    #[serde(rename = "Direct Imaging")]
    DirectImaging,
    #[serde(rename = "Gravitational Microlensing")]
    GravitationalMicrolensing,
    #[serde(rename = "Astrometry")]
    Astrometry,
    #[serde(rename = "Transit Timing Variation")]
    TransitTimingVariation,
}

impl DetectionMethod {
    pub const ALL: [DetectionMethod; 6] = [
        DetectionMethod::Transit,
        DetectionMethod::RadialVelocity,
        DetectionMethod::DirectImaging,
        DetectionMethod::GravitationalMicrolensing,
        DetectionMethod::Astrometry,
        DetectionMethod::TransitTimingVariation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DetectionMethod::Transit => "Transit",
            DetectionMethod::RadialVelocity => "Radial Velocity",
            DetectionMethod::DirectImaging => "Direct Imaging",
            DetectionMethod::GravitationalMicrolensing => "Gravitational Microlensing",
            DetectionMethod::Astrometry => "Astrometry",
            DetectionMethod::TransitTimingVariation => "Transit Timing Variation",
        }
    }
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
