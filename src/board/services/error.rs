//! Service-level errors and their caller-facing classification.

use crate::board::domain::{BoardDomainError, ColumnId, ProjectId, TaskId};
use crate::ordering::{ChainError, StoreError};
use thiserror::Error;

/// Caller-facing classification of a service failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardErrorKind {
    /// The record is absent or not owned by the caller.
    NotFound,
    /// The request was rejected by validation.
    InvalidArgument,
    /// A concurrent transaction modified the same records; retry the whole
    /// operation.
    Conflict,
    /// The store failed or holds data that violates board invariants.
    StoreFailure,
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// The project does not exist or belongs to someone else.
    #[error("project {0} not found")]
    ProjectNotFound(ProjectId),

    /// The column does not exist or belongs to someone else.
    #[error("column {0} not found")]
    ColumnNotFound(ColumnId),

    /// The task does not exist or belongs to someone else.
    #[error("task {0} not found")]
    TaskNotFound(TaskId),

    /// The caller already owns a project with this name.
    #[error("a project named '{0}' already exists")]
    DuplicateProjectName(String),

    /// The project already has a column with this name, ignoring case.
    #[error("a column named '{0}' already exists in this project")]
    DuplicateColumnName(String),

    /// A reposition request cannot be satisfied.
    #[error("invalid move: {0}")]
    InvalidMove(String),

    /// A task update named neither a name nor a description.
    #[error("a task update must change the name or the description")]
    EmptyUpdate,

    /// A task description exceeds the configured limit.
    #[error("description is {actual} characters long, at most {max} are allowed")]
    DescriptionTooLong {
        /// Configured maximum length in characters.
        max: usize,
        /// Length of the rejected description in characters.
        actual: usize,
    },

    /// A scope already holds the configured maximum number of members.
    #[error("{scope} already holds the maximum of {limit} entries")]
    ScopeFull {
        /// Displayed scope description.
        scope: String,
        /// Configured maximum number of members.
        limit: usize,
    },

    /// A stored chain violates ordering invariants.
    #[error("stored ordering is corrupted: {0}")]
    Corrupted(String),

    /// The store rejected or failed an operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

impl BoardServiceError {
    /// Classifies the error for callers.
    #[must_use]
    pub const fn kind(&self) -> BoardErrorKind {
        match self {
            Self::ProjectNotFound(_) | Self::ColumnNotFound(_) | Self::TaskNotFound(_) => {
                BoardErrorKind::NotFound
            }
            Self::Domain(_)
            | Self::DuplicateProjectName(_)
            | Self::DuplicateColumnName(_)
            | Self::InvalidMove(_)
            | Self::EmptyUpdate
            | Self::DescriptionTooLong { .. }
            | Self::ScopeFull { .. }
            | Self::Store(StoreError::UniqueViolation { .. }) => BoardErrorKind::InvalidArgument,
            Self::Store(StoreError::Conflict(_)) => BoardErrorKind::Conflict,
            Self::Corrupted(_) | Self::Store(_) => BoardErrorKind::StoreFailure,
        }
    }

    /// Returns `true` when retrying the whole operation may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self.kind(), BoardErrorKind::Conflict)
    }
}

impl From<ChainError<ColumnId>> for BoardServiceError {
    fn from(err: ChainError<ColumnId>) -> Self {
        match err {
            ChainError::NodeNotFound(id) | ChainError::PredecessorNotFound(id) => {
                Self::ColumnNotFound(id)
            }
            ChainError::SelfReference(_) | ChainError::CrossScope { .. } => {
                Self::InvalidMove(err.to_string())
            }
            ChainError::Corrupted(corruption) => Self::Corrupted(corruption.to_string()),
            ChainError::Store(store) => Self::Store(store),
        }
    }
}

impl From<ChainError<TaskId>> for BoardServiceError {
    fn from(err: ChainError<TaskId>) -> Self {
        match err {
            ChainError::NodeNotFound(id) | ChainError::PredecessorNotFound(id) => {
                Self::TaskNotFound(id)
            }
            ChainError::SelfReference(_) | ChainError::CrossScope { .. } => {
                Self::InvalidMove(err.to_string())
            }
            ChainError::Corrupted(corruption) => Self::Corrupted(corruption.to_string()),
            ChainError::Store(store) => Self::Store(store),
        }
    }
}

/// Replaces a unique-index violation with a domain-specific duplicate error.
pub(super) fn on_duplicate(
    err: StoreError,
    duplicate: impl FnOnce() -> BoardServiceError,
) -> BoardServiceError {
    match err {
        StoreError::UniqueViolation { .. } => duplicate(),
        other => BoardServiceError::Store(other),
    }
}
