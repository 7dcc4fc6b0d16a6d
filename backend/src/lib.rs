//! # Units Backend
//!
//! REST service for converting temperatures between the Celsius, Fahrenheit
//! and Kelvin scales.
//!
//! ## Architecture
//!
//! - [`units`]: Conversion library and the [`units::UnitConverter`] seam
//! - [`services`]: Request validation and unit-name normalization
//! - [`api`]: Response envelopes and DTOs
//! - [`config`]: Server configuration from TOML and environment
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use rgapps_units::services::temperature::convert_temperature;
//! use rgapps_units::units::TemperatureConverter;
//!
//! let params = HashMap::from([
//!     ("from_unit".to_string(), "degC".to_string()),
//!     ("from_value".to_string(), "100".to_string()),
//! ]);
//! let result = convert_temperature("degF", &params, &TemperatureConverter).unwrap();
//! assert!((result.to_value - 212.0).abs() < 1e-9);
//! ```

pub mod api;
pub mod config;
pub mod services;
pub mod units;

#[cfg(feature = "http-server")]
pub mod http;
