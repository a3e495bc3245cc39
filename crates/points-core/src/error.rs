//! # Error Types
//!
//! Domain-specific error types for points-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  points-core errors (this file)                                        │
//! │  ├── ValidationError  - Required receipt field missing                 │
//! │  └── ScoreError       - Amount text is not a decimal number            │
//! │                                                                         │
//! │  points-store errors (separate crate)                                  │
//! │  └── StoreError       - Score bookkeeping failures                     │
//! │                                                                         │
//! │  points-api errors (in app)                                            │
//! │  └── ApiError         - What the HTTP client sees ({"msg": ...})       │
//! │                                                                         │
//! │  Flow: ValidationError ──────────────► ApiError (400)                  │
//! │        ScoreError ──► policy ──► 0 points  or  ApiError (400)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Receipt validation errors.
///
/// Raised before any scoring runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    ///
    /// `field` is the JSON name (`retailer`, `purchaseDate`, ...).
    #[error("{field} is required")]
    Required { field: String },
}

// =============================================================================
// Score Error
// =============================================================================

/// Errors that abort a scoring run.
///
/// Only malformed amounts abort. A bad purchase date or time just zeroes
/// its own rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// An amount (the total or an item price) is not a decimal number.
    #[error("{field} has invalid amount: '{value}'")]
    InvalidAmount { field: String, value: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for scoring operations.
pub type ScoreResult<T> = Result<T, ScoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "purchaseDate".to_string(),
        };
        assert_eq!(err.to_string(), "purchaseDate is required");
    }

    #[test]
    fn test_score_error_messages() {
        let err = ScoreError::InvalidAmount {
            field: "items[1].price".to_string(),
            value: "1.2.3".to_string(),
        };
        assert_eq!(err.to_string(), "items[1].price has invalid amount: '1.2.3'");
    }
}
