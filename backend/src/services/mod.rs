//! Service layer for request validation and orchestration.
//!
//! Services sit between the HTTP handlers and the conversion library. They
//! take already-extracted request data and never touch HTTP types.

pub mod temperature;

pub use temperature::{convert_temperature, normalize_unit, TemperatureError};
