//! Storage port used by the ordering engine.

use super::ChainNode;
use std::sync::Arc;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Transaction-scoped access to the records of one node type.
///
/// A `ChainStore` handle is only valid inside one open transaction. Reads
/// observe the transaction's snapshot, and writes become visible to other
/// transactions only when the owner of the handle commits.
pub trait ChainStore<N: ChainNode> {
    /// Loads a node by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the lookup fails.
    fn find(&mut self, id: N::Id) -> StoreResult<Option<N>>;

    /// Loads every node of a scope, in no particular order.
    ///
    /// Implementations backed by a shared database should lock the returned
    /// rows for the remainder of the transaction.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the scan fails.
    fn members(&mut self, scope: N::ScopeId) -> StoreResult<Vec<N>>;

    /// Inserts a new node record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UniqueViolation`] when the record collides with
    /// an existing one, or another [`StoreError`] when persistence fails.
    fn insert(&mut self, node: &N) -> StoreResult<()>;

    /// Persists the links and update timestamps of existing nodes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingRecord`] when one of the nodes no longer
    /// exists, or another [`StoreError`] when persistence fails.
    fn update_links(&mut self, nodes: &[N]) -> StoreResult<()>;

    /// Removes a node record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingRecord`] when the node does not exist.
    fn remove(&mut self, id: N::Id) -> StoreResult<()>;

    /// Removes every node of a scope and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when persistence fails.
    fn remove_scope(&mut self, scope: N::ScopeId) -> StoreResult<usize>;
}

/// Errors raised by store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The transaction was aborted because a concurrent transaction modified
    /// the same rows. The whole operation may be retried from scratch.
    #[error("transaction aborted by a concurrent modification: {0}")]
    Conflict(Arc<dyn std::error::Error + Send + Sync>),

    /// A record expected by a write no longer exists.
    #[error("record {0} does not exist")]
    MissingRecord(String),

    /// A uniqueness constraint rejected the write.
    #[error("unique constraint '{constraint}' violated")]
    UniqueViolation {
        /// Name of the violated constraint or index.
        constraint: String,
    },

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps a serialization or lock conflict reported by the store.
    pub fn conflict(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Conflict(Arc::new(err))
    }

    /// Reports a missing record by its displayed identifier.
    pub fn missing_record(id: impl ToString) -> Self {
        Self::MissingRecord(id.to_string())
    }

    /// Wraps persisted-data decoding or validation failures.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence-layer failure.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns `true` when retrying the whole operation may succeed.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}
