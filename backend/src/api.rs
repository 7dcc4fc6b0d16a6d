//! Data Transfer Objects for API responses.
//!
//! Every successful response is wrapped in a [`ResponseEnvelope`] of the form
//! `{"status": "success", "data": ...}`.

use serde::{Deserialize, Serialize};

/// Key of the status field in a response envelope.
pub const STATUS_KEY: &str = "status";
/// Key of the payload field in a response envelope.
pub const DATA_KEY: &str = "data";
/// Status value of a successful response.
pub const STATUS_SUCCESS: &str = "success";

/// Outcome of a single temperature conversion.
///
/// Unit names are reported in their normalized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub from_unit: String,
    pub from_value: f64,
    pub to_unit: String,
    pub to_value: f64,
}

/// Uniform wrapper for successful responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    pub status: String,
    pub data: T,
}

impl<T> ResponseEnvelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
