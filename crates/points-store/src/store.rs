//! # Points Store
//!
//! The identifier → points mapping behind the HTTP endpoints.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    InMemoryStore Locking                                │
//! │                                                                         │
//! │  POST /receipts/process ──► put() ──► write lock ──► insert             │
//! │  GET  /receipts/{id}/points ──► get() ──► read lock ──► lookup          │
//! │                                                                         │
//! │  Lookups vastly outnumber writes, so RwLock lets them run in           │
//! │  parallel. Locks are held only for the map operation and never         │
//! │  across an .await.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use points_core::Points;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Capability for recording and looking up scores.
///
/// Implementations must be safe to share across request handlers.
pub trait PointsStore: Send + Sync {
    /// Records the score for a new identifier.
    ///
    /// Fails with [`StoreError::DuplicateId`] if the id already has a score.
    fn put(&self, id: &str, points: Points) -> StoreResult<()>;

    /// Looks up the score for an identifier.
    ///
    /// Returns `Ok(None)` for an id that was never recorded.
    fn get(&self, id: &str) -> StoreResult<Option<Points>>;

    /// Number of recorded scores.
    fn len(&self) -> StoreResult<usize>;

    /// Whether no scores are recorded.
    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// Process-lifetime store backed by a lock-protected `HashMap`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    scores: RwLock<HashMap<String, Points>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PointsStore for InMemoryStore {
    fn put(&self, id: &str, points: Points) -> StoreResult<()> {
        let mut scores = self.scores.write().map_err(|_| StoreError::LockPoisoned)?;

        if scores.contains_key(id) {
            return Err(StoreError::DuplicateId(id.to_string()));
        }

        scores.insert(id.to_string(), points);
        debug!(id = %id, points, "Score recorded");
        Ok(())
    }

    fn get(&self, id: &str) -> StoreResult<Option<Points>> {
        let scores = self.scores.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(scores.get(id).copied())
    }

    fn len(&self) -> StoreResult<usize> {
        let scores = self.scores.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(scores.len())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_put_then_get() {
        let store = InMemoryStore::new();
        store.put("a", 28).unwrap();
        store.put("b", 0).unwrap();

        assert_eq!(store.get("a").unwrap(), Some(28));
        assert_eq!(store.get("b").unwrap(), Some(0));
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_unknown_id_is_none() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_scores_never_change() {
        let store = InMemoryStore::new();
        store.put("a", 28).unwrap();

        let err = store.put("a", 109).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId("a".to_string()));
        assert_eq!(store.get("a").unwrap(), Some(28));
    }

    #[test]
    fn test_concurrent_writers_and_readers() {
        let store: Arc<dyn PointsStore> = Arc::new(InMemoryStore::new());

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for n in 0..100 {
                        let id = format!("{}-{}", worker, n);
                        store.put(&id, n).unwrap();
                        assert_eq!(store.get(&id).unwrap(), Some(n));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len().unwrap(), 800);
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let store = Arc::new(InMemoryStore::new());

        let poisoner = Arc::clone(&store);
        let _ = thread::spawn(move || {
            let _guard = poisoner.scores.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(store.get("a").unwrap_err(), StoreError::LockPoisoned);
        assert_eq!(store.put("a", 1).unwrap_err(), StoreError::LockPoisoned);
    }
}
