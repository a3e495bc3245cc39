//! # Validation Module
//!
//! Required-field checks run before a receipt is scored.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: JSON binding (points-api)                                    │
//! │  ├── Body must be JSON                                                 │
//! │  └── Fields must have the right JSON types                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── retailer, purchaseDate, purchaseTime, total must be non-empty     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Scoring (never rejects)                                      │
//! │  ├── Bad amount   → ScoreError (policy decides)                        │
//! │  └── Bad date/time → that rule scores 0                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Item fields are not validated here.

use crate::error::ValidationError;
use crate::types::Receipt;

pub use crate::error::ValidationResult;

/// Validates that every required top-level field is present.
///
/// Fields are checked in this order and the first failure is returned:
/// `retailer`, `purchaseDate`, `purchaseTime`, `total`.
///
/// ## Example
/// ```rust
/// use points_core::{validate_receipt, Receipt};
///
/// let mut receipt = Receipt {
///     retailer: "Target".to_string(),
///     purchase_date: "2022-01-01".to_string(),
///     purchase_time: "13:01".to_string(),
///     items: vec![],
///     total: "1.25".to_string(),
/// };
/// assert!(validate_receipt(&receipt).is_ok());
///
/// receipt.total.clear();
/// assert_eq!(validate_receipt(&receipt).unwrap_err().to_string(), "total is required");
/// ```
pub fn validate_receipt(receipt: &Receipt) -> ValidationResult<()> {
    let required = [
        ("retailer", &receipt.retailer),
        ("purchaseDate", &receipt.purchase_date),
        ("purchaseTime", &receipt.purchase_time),
        ("total", &receipt.total),
    ];

    for (field, value) in required {
        if value.is_empty() {
            return Err(ValidationError::Required {
                field: field.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
