//! # points-store: Score Storage for Receipt Points
//!
//! Records the score computed for each submitted receipt under a freshly
//! generated identifier, and hands it back on lookup.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Data Flow                           │
//! │                                                                         │
//! │  POST /receipts/process                GET /receipts/{id}/points        │
//! │       │                                      │                          │
//! │       │ ids.generate()                       │                          │
//! │       │ store.put(id, points)                │ store.get(id)            │
//! │       ▼                                      ▼                          │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  points-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────────────┐        ┌──────────────────────┐     │   │
//! │  │   │  store.rs            │        │  ids.rs              │     │   │
//! │  │   │                      │        │                      │     │   │
//! │  │   │  PointsStore         │        │  IdGenerator         │     │   │
//! │  │   │  InMemoryStore       │        │  UuidGenerator       │     │   │
//! │  │   └──────────────────────┘        └──────────────────────┘     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `PointsStore` capability and its in-memory implementation
//! - [`ids`] - Identifier generation
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use points_store::{IdGenerator, InMemoryStore, PointsStore, UuidGenerator};
//!
//! let store = InMemoryStore::new();
//! let id = UuidGenerator.generate();
//!
//! store.put(&id, 28).unwrap();
//! assert_eq!(store.get(&id).unwrap(), Some(28));
//! assert_eq!(store.get("never-issued").unwrap(), None);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ids;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use ids::{IdGenerator, UuidGenerator};
pub use store::{InMemoryStore, PointsStore};
