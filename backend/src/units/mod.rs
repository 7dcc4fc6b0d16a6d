//! Unit conversion library.
//!
//! The HTTP layer never converts values itself: it hands a value and two unit
//! tokens to a [`UnitConverter`] and reports whatever comes back. The default
//! converter, [`TemperatureConverter`], understands the Celsius, Fahrenheit
//! and Kelvin scales.

pub mod temperature;

pub use temperature::{TemperatureConverter, TemperatureScale};

/// Error type for unit conversions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// The unit token is not known to the converter.
    #[error("Unit [{unit}] is not recognized")]
    UnrecognizedUnit { unit: String },

    /// The value is NaN or infinite, or converting it overflows.
    #[error("Value [{value}] cannot be converted")]
    InvalidValue { value: f64 },

    /// Unexpected failure inside the converter.
    #[error("Internal conversion error: {message}")]
    Internal { message: String },
}

impl ConversionError {
    pub fn unrecognized(unit: impl Into<String>) -> Self {
        Self::UnrecognizedUnit { unit: unit.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the error was caused by the caller's input rather than a fault
    /// in the converter.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Internal { .. })
    }
}

/// Converts a value between two units named by string tokens.
pub trait UnitConverter: Send + Sync {
    fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError>;
}
