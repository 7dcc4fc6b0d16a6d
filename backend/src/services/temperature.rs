//! Temperature conversion request handling.
//!
//! Validates the raw query parameters of a conversion request, normalizes the
//! unit names and delegates the arithmetic to a [`UnitConverter`]. Nothing in
//! here knows about HTTP, so the whole validation sequence can be exercised
//! with a plain `HashMap`.

use std::collections::HashMap;

use tracing::debug;

use crate::api::ConversionResult;
use crate::units::{ConversionError, UnitConverter};

pub const FROM_UNIT_PARAM: &str = "from_unit";
pub const FROM_VALUE_PARAM: &str = "from_value";

/// Error type for temperature conversion requests.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TemperatureError {
    /// No query parameters were supplied at all.
    #[error("Parameters from_unit=<from_unit>&from_value=<from_value> are missing")]
    ParametersMissing,

    /// A required query parameter is absent.
    #[error("Missing required {name} parameter")]
    MissingParameter { name: &'static str },

    /// `from_value` is not a finite number.
    #[error("Parameter from_value=[{value}] not valid. A numeric value must be provided.")]
    InvalidParameterType { value: String },

    /// Source and target units name the same unit.
    #[error("from_unit=[{from_unit}] and to_unit=[{to_unit}] units cannot be equal")]
    EqualUnits { from_unit: String, to_unit: String },

    /// The converter rejected the request.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl TemperatureError {
    /// Whether the error should be reported as a bad request.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Conversion(e) => e.is_client_error(),
            _ => true,
        }
    }
}

/// Normalize a unit name to the token the converter expects.
///
/// The name is trimmed and lowercased. The three temperature aliases
/// `degc`, `degf` and `degk` are then restored to `degC`, `degF` and `degK`;
/// every other name is returned lowercased and left for the converter to judge.
pub fn normalize_unit(unit: &str) -> String {
    let unit = unit.trim().to_lowercase();
    match unit.as_str() {
        "degc" => "degC".to_string(),
        "degf" => "degF".to_string(),
        "degk" => "degK".to_string(),
        _ => unit,
    }
}

/// Case-insensitive comparison of two unit names, ignoring surrounding whitespace.
pub fn units_equal(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Parse a `from_value` parameter, accepting only finite numbers.
pub fn parse_from_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Validate a conversion request and run it through `converter`.
///
/// Checks run in a fixed order and the first failure is returned.
pub fn convert_temperature(
    to_unit: &str,
    params: &HashMap<String, String>,
    converter: &dyn UnitConverter,
) -> Result<ConversionResult, TemperatureError> {
    let result = validate_and_convert(to_unit, params, converter);
    match &result {
        Ok(r) => debug!(
            from_unit = %r.from_unit,
            to_unit = %r.to_unit,
            from_value = r.from_value,
            to_value = r.to_value,
            "Temperature converted"
        ),
        Err(e) => debug!(error = %e, to_unit, "Temperature conversion rejected"),
    }
    result
}

fn validate_and_convert(
    to_unit: &str,
    params: &HashMap<String, String>,
    converter: &dyn UnitConverter,
) -> Result<ConversionResult, TemperatureError> {
    if params.is_empty() {
        return Err(TemperatureError::ParametersMissing);
    }

    let from_unit = params
        .get(FROM_UNIT_PARAM)
        .ok_or(TemperatureError::MissingParameter {
            name: FROM_UNIT_PARAM,
        })?;

    let raw_value = params
        .get(FROM_VALUE_PARAM)
        .ok_or(TemperatureError::MissingParameter {
            name: FROM_VALUE_PARAM,
        })?;

    let from_value =
        parse_from_value(raw_value).ok_or_else(|| TemperatureError::InvalidParameterType {
            value: raw_value.clone(),
        })?;

    if units_equal(from_unit, to_unit) {
        return Err(TemperatureError::EqualUnits {
            from_unit: from_unit.clone(),
            to_unit: to_unit.to_string(),
        });
    }

    let from_unit = normalize_unit(from_unit);
    let to_unit = normalize_unit(to_unit);

    let to_value = converter.convert(from_value, &from_unit, &to_unit)?;

    Ok(ConversionResult {
        from_unit,
        from_value,
        to_unit,
        to_value,
    })
}
