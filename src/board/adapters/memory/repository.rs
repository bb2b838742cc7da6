//! Mutex-serialized in-memory repository.

use super::transaction::{BoardState, MemoryTransaction};
use crate::board::ports::{BoardRepository, BoardTransaction};
use crate::ordering::StoreError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Thread-safe in-memory board repository.
///
/// Transactions are serialized by a mutex. Each one works on a copy of the
/// committed state that replaces it only when the work succeeds, so a failed
/// operation leaves no trace.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardRepository {
    state: Arc<Mutex<BoardState>>,
    committed_writes: Arc<AtomicUsize>,
    write_limit: Arc<Mutex<Option<usize>>>,
}

impl InMemoryBoardRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of row writes committed so far.
    #[must_use]
    pub fn committed_writes(&self) -> usize {
        self.committed_writes.load(Ordering::SeqCst)
    }

    /// Makes every later transaction fail once it attempts more than
    /// `allowed` row writes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] when the limit lock is poisoned.
    pub fn fail_writes_after(&self, allowed: usize) -> Result<(), StoreError> {
        *self.write_limit.lock().map_err(poisoned)? = Some(allowed);
        Ok(())
    }

    /// Removes any injected write failure.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] when the limit lock is poisoned.
    pub fn clear_write_failures(&self) -> Result<(), StoreError> {
        *self.write_limit.lock().map_err(poisoned)? = None;
        Ok(())
    }
}

fn poisoned(err: impl ToString) -> StoreError {
    StoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl BoardRepository for InMemoryBoardRepository {
    async fn transaction<T, E, F>(&self, work: F) -> Result<T, E>
    where
        F: FnOnce(&mut dyn BoardTransaction) -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: From<StoreError> + Send + 'static,
    {
        let write_limit = *self.write_limit.lock().map_err(poisoned)?;
        let mut committed = self.state.lock().map_err(poisoned)?;

        let mut tx = MemoryTransaction::begin(committed.clone(), write_limit);
        let value = work(&mut tx)?;
        let (state, writes) = tx.finish();

        *committed = state;
        self.committed_writes.fetch_add(writes, Ordering::SeqCst);
        debug!(writes, "in-memory transaction committed");
        Ok(value)
    }
}
