//! Application state for the HTTP server.

use std::sync::Arc;

use crate::units::{TemperatureConverter, UnitConverter};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Converter used by the temperature endpoint
    pub converter: Arc<dyn UnitConverter>,
}

impl AppState {
    /// Create a new application state with the given converter.
    pub fn new(converter: Arc<dyn UnitConverter>) -> Self {
        Self { converter }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(TemperatureConverter::new()))
    }
}
