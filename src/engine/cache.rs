// Per-direction model cache with single-flight first loads

use crate::error::Result;
use crate::models::Direction;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Two-slot cache keyed by direction.
///
/// Slots fill on first use and are never evicted; the cache lives as long as
/// the engine that owns it. Concurrent first requests for one direction are
/// serialized: losers of the race wait for the winner's result instead of
/// loading a second copy. A failed load leaves the slot empty so a later
/// request retries.
pub struct ModelCache<T> {
    slots: [OnceCell<Arc<T>>; 2],
}

impl<T> ModelCache<T> {
    pub fn new() -> Self {
        Self {
            slots: [OnceCell::new(), OnceCell::new()],
        }
    }

    /// Cached handle for `direction`, if its slot is filled.
    pub fn get(&self, direction: Direction) -> Option<Arc<T>> {
        self.slots[direction.index()].get().cloned()
    }

    /// Cached handle for `direction`, running `load` to fill the slot first
    /// if it is empty.
    pub async fn get_or_load<F, Fut>(&self, direction: Direction, load: F) -> Result<Arc<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let slot = &self.slots[direction.index()];
        let handle = slot
            .get_or_try_init(|| async { load().await.map(Arc::new) })
            .await?;
        Ok(handle.clone())
    }

    /// Directions whose model is loaded.
    pub fn loaded(&self) -> Vec<Direction> {
        Direction::ALL
            .iter()
            .copied()
            .filter(|d| self.slots[d.index()].initialized())
            .collect()
    }
}

impl<T> Default for ModelCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
