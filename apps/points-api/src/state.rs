//! # Application State
//!
//! Shared state handed to every handler.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  AppState (Clone, cheap: Arc fields)                                   │
//! │  ├── store: Arc<dyn PointsStore>   id → points (internally locked)     │
//! │  ├── ids:   Arc<dyn IdGenerator>   fresh receipt ids                   │
//! │  └── invalid_amount                read-only after startup             │
//! │                                                                         │
//! │  Both capabilities are injected, so tests can swap in fixed ids or     │
//! │  a failing store without touching the handlers.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use points_store::{IdGenerator, InMemoryStore, PointsStore, UuidGenerator};

use crate::config::{ApiConfig, InvalidAmountPolicy};

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PointsStore>,
    pub ids: Arc<dyn IdGenerator>,
    pub invalid_amount: InvalidAmountPolicy,
}

impl AppState {
    /// Creates state from explicit capabilities.
    pub fn new(
        store: Arc<dyn PointsStore>,
        ids: Arc<dyn IdGenerator>,
        invalid_amount: InvalidAmountPolicy,
    ) -> Self {
        AppState {
            store,
            ids,
            invalid_amount,
        }
    }

    /// Production state: in-memory store, UUID ids, configured policy.
    pub fn from_config(config: &ApiConfig) -> Self {
        AppState::new(
            Arc::new(InMemoryStore::new()),
            Arc::new(UuidGenerator),
            config.scoring.invalid_amount,
        )
    }
}
