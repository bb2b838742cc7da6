//! Domain model for project boards.
//!
//! Projects own a chain of columns and columns own a chain of tasks. Column
//! and task records implement [`crate::ordering::ChainNode`] so the ordering
//! engine can maintain both chains with one algorithm.

mod board;
mod column;
mod error;
mod ids;
mod names;
mod project;
mod task;

pub use board::{Board, BoardColumn, DeletionSummary};
pub use column::{Column, PersistedColumnData};
pub use error::{BoardDomainError, NameKind};
pub use ids::{ColumnId, ProjectId, TaskId};
pub use names::{ColumnName, MAX_NAME_LENGTH, OwnerName, ProjectName, TaskName};
pub use project::{PersistedProjectData, Project};
pub use task::{PersistedTaskData, Task};
