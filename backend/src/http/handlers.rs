//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for validation and conversion.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::Uri,
    Json,
};

use super::error::AppError;
use super::state::AppState;
use crate::api::{ConversionResult, HealthResponse, ResponseEnvelope};
use crate::services::temperature;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

// =============================================================================
// Temperature Conversion
// =============================================================================

/// GET /temperature/{to_unit}?from_unit=<from_unit>&from_value=<from_value>
///
/// Convert `from_value` expressed in `from_unit` into `to_unit`.
pub async fn convert_temperature(
    State(state): State<AppState>,
    Path(to_unit): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> HandlerResult<ResponseEnvelope<ConversionResult>> {
    let result = temperature::convert_temperature(&to_unit, &params, state.converter.as_ref())?;
    Ok(Json(ResponseEnvelope::success(result)))
}

// =============================================================================
// Fallback
// =============================================================================

/// Any request that matches no route.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No resource at {}", uri.path()))
}
