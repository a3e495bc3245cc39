//! # points-core: Pure Scoring Logic for Receipt Points
//!
//! This crate is the **heart** of Receipt Points. It turns a submitted
//! purchase receipt into a reward-points score using a fixed set of rules,
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    points-api (HTTP, axum)                      │   │
//! │  │    POST /receipts/process     GET /receipts/{id}/points         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ points-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  amount   │  │  scoring  │  │ validation│  │   │
//! │  │   │  Receipt  │  │  parsing  │  │   rules   │  │  required │  │   │
//! │  │   │ Breakdown │  │ whole-ness│  │ breakdown │  │  fields   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 points-store (id → points)                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Receipt, PurchaseItem, PointsBreakdown)
//! - [`amount`] - Decimal amount parsing and whole-number checks
//! - [`scoring`] - The scoring rules
//! - [`error`] - Domain error types
//! - [`validation`] - Required-field validation
//!
//! ## Example Usage
//!
//! ```rust
//! use points_core::{compute_score, PurchaseItem, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: vec![PurchaseItem::new("Gatorade", "2.25"); 4],
//!     total: "9.00".to_string(),
//! };
//!
//! assert_eq!(compute_score(&receipt), 109);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod error;
pub mod scoring;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ScoreError, ValidationError};
pub use scoring::{compute_score, score_receipt};
pub use types::*;
pub use validation::validate_receipt;
