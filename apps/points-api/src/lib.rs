//! # Points API
//!
//! HTTP service that scores purchase receipts and hands the points back.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Points API Service                              │
//! │                                                                         │
//! │  Client ───► axum (8080) ───► routes ───► points-core (scoring)        │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                            points-store                                 │
//! │                           (id → points)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `POINTS_CONFIG` - Path to a TOML config file
//! - `POINTS_BIND_ADDR` - Listen address (default: 0.0.0.0)
//! - `POINTS_PORT` - Listen port (default: 8080)
//! - `POINTS_INVALID_AMOUNT` - `zero` or `reject` (default: zero)
//! - `RUST_LOG` - Log filter

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
