//! Spectral classification codes.
//!
//! A spectral type code such as `G2V` is made of three parts: the Harvard
//! class letter (`G`), a subclass digit (`2`) and the Yerkes luminosity class
//! (`V`). Only main-sequence stars are generated, so [`LuminosityClass`] has
//! a single variant for now.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing a spectral type code fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpectralTypeError {
    /// The code was empty
    #[error("Empty spectral type code")]
    Empty,

    /// Unknown class letter
    #[error("Unknown spectral class '{0}'")]
    UnknownClass(char),

    /// Missing or non-digit subclass
    #[error("Invalid subclass in spectral type '{0}'")]
    InvalidSubclass(String),

    /// Unknown luminosity class suffix
    #[error("Unknown luminosity class '{0}'")]
    UnknownLuminosity(String),
}

/// Harvard spectral class, ordered from hottest to coolest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralClass {
    /// All classes in O→M order.
    pub const ALL: [SpectralClass; 7] = [
        SpectralClass::O,
        SpectralClass::B,
        SpectralClass::A,
        SpectralClass::F,
        SpectralClass::G,
        SpectralClass::K,
        SpectralClass::M,
    ];

    /// The class letter.
    pub fn letter(self) -> char {
        match self {
            SpectralClass::O => 'O',
            SpectralClass::B => 'B',
            SpectralClass::A => 'A',
            SpectralClass::F => 'F',
            SpectralClass::G => 'G',
            SpectralClass::K => 'K',
            SpectralClass::M => 'M',
        }
    }

    /// Look up a class by its letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.letter() == letter)
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Yerkes luminosity class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LuminosityClass {
    /// Main sequence (dwarf)
    #[default]
    V,
}

impl LuminosityClass {
    /// The roman-numeral suffix used in spectral codes.
    pub fn as_str(self) -> &'static str {
        match self {
            LuminosityClass::V => "V",
        }
    }
}

impl fmt::Display for LuminosityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LuminosityClass {
    type Err = SpectralTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "V" => Ok(LuminosityClass::V),
            other => Err(SpectralTypeError::UnknownLuminosity(other.to_string())),
        }
    }
}

/// Full spectral type code, e.g. `G2V`.
///
/// Serializes as its string code so that every output format carries the
/// familiar notation rather than a nested structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SpectralType {
    pub class: SpectralClass,
    /// Subclass digit in `0..=9`
    pub subclass: u8,
    pub luminosity: LuminosityClass,
}

impl SpectralType {
    /// Create a main-sequence spectral type.
    ///
    /// The subclass is reduced modulo 10 to stay a single digit.
    pub fn main_sequence(class: SpectralClass, subclass: u8) -> Self {
        Self {
            class,
            subclass: subclass % 10,
            luminosity: LuminosityClass::V,
        }
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.class, self.subclass, self.luminosity)
    }
}

impl FromStr for SpectralType {
    type Err = SpectralTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(SpectralTypeError::Empty)?;
        let class = SpectralClass::from_letter(letter)
            .ok_or(SpectralTypeError::UnknownClass(letter))?;

        let subclass = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(|| SpectralTypeError::InvalidSubclass(s.to_string()))?;

        let luminosity = chars.as_str().parse()?;

        Ok(Self {
            class,
            subclass: subclass as u8,
            luminosity,
        })
    }
}

impl From<SpectralType> for String {
    fn from(value: SpectralType) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for SpectralType {
    type Error = SpectralTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
