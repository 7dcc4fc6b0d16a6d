//! HTTP server module for the units backend.
//!
//! This module provides an axum-based HTTP server that exposes the temperature
//! conversion service as a REST API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Path and query extraction                              │
//! │  - JSON envelopes, error bodies                           │
//! │  - CORS, compression, tracing                             │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services::temperature)                    │
//! │  - Parameter validation                                   │
//! │  - Unit normalization                                     │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Conversion Library (units)                               │
//! │  - UnitConverter / TemperatureConverter                   │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
