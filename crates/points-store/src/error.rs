//! # Store Error Types
//!
//! Error types for score bookkeeping.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in points-api) ← logged, reported as 500                    │
//! │                                                                         │
//! │  A missing id is NOT an error: get() returns Ok(None).                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Score store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An identifier was issued twice.
    ///
    /// ## When This Occurs
    /// - The id generator produced a collision
    /// - A caller tried to overwrite an existing score
    ///
    /// Stored scores never change, so the second write is refused.
    #[error("Score already recorded for id: {0}")]
    DuplicateId(String),

    /// A thread panicked while holding the store lock.
    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
