//! Temperature scales and the default converter.
//!
//! Conversions go through Kelvin, so every pair of scales needs only the two
//! affine maps to and from Kelvin.

use std::fmt;
use std::str::FromStr;

use super::{ConversionError, UnitConverter};

const KELVIN_OFFSET: f64 = 273.15;
const FAHRENHEIT_OFFSET: f64 = 32.0;
const FAHRENHEIT_PER_KELVIN: f64 = 9.0 / 5.0;

/// A temperature scale known to the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    /// Look up a scale by its library token.
    ///
    /// Tokens are matched exactly. Callers are expected to normalize first,
    /// which yields either one of the `degC`/`degF`/`degK` aliases or a
    /// lowercased name.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "degC" | "celsius" | "c" => Some(Self::Celsius),
            "degF" | "fahrenheit" | "f" => Some(Self::Fahrenheit),
            "degK" | "kelvin" | "k" => Some(Self::Kelvin),
            _ => None,
        }
    }

    /// Canonical library token for this scale.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Celsius => "degC",
            Self::Fahrenheit => "degF",
            Self::Kelvin => "degK",
        }
    }

    pub fn to_kelvin(&self, value: f64) -> f64 {
        match self {
            Self::Celsius => value + KELVIN_OFFSET,
            Self::Fahrenheit => (value - FAHRENHEIT_OFFSET) / FAHRENHEIT_PER_KELVIN + KELVIN_OFFSET,
            Self::Kelvin => value,
        }
    }

    pub fn from_kelvin(&self, kelvin: f64) -> f64 {
        match self {
            Self::Celsius => kelvin - KELVIN_OFFSET,
            Self::Fahrenheit => (kelvin - KELVIN_OFFSET) * FAHRENHEIT_PER_KELVIN + FAHRENHEIT_OFFSET,
            Self::Kelvin => kelvin,
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for TemperatureScale {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| ConversionError::unrecognized(s))
    }
}

/// Default [`UnitConverter`] for temperatures.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemperatureConverter;

impl TemperatureConverter {
    pub fn new() -> Self {
        Self
    }
}

impl UnitConverter for TemperatureConverter {
    fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
        if !value.is_finite() {
            return Err(ConversionError::InvalidValue { value });
        }

        let from: TemperatureScale = from_unit.parse()?;
        let to: TemperatureScale = to_unit.parse()?;

        if from == to {
            return Ok(value);
        }

        let converted = to.from_kelvin(from.to_kelvin(value));
        if !converted.is_finite() {
            return Err(ConversionError::InvalidValue { value });
        }

        Ok(converted)
    }
}
