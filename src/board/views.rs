//! Serializable view records for presenting board state.
//!
//! Views are plain data: converting a record never fails and never touches
//! the store.

use crate::board::domain::{
    Board, BoardColumn, Column, ColumnId, DeletionSummary, Project, ProjectId, Task, TaskId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// External view of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectView {
    /// Project identifier.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Owner identity.
    pub owner: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// External view of a column and, when rendered as part of a board, its
/// tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnView {
    /// Column identifier.
    pub id: ColumnId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Column name.
    pub name: String,
    /// Preceding column, if any.
    pub predecessor_id: Option<ColumnId>,
    /// Following column, if any.
    pub successor_id: Option<ColumnId>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Tasks from head to tail.
    pub tasks: Vec<TaskView>,
}

/// External view of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskView {
    /// Task identifier.
    pub id: TaskId,
    /// Owning column.
    pub column_id: ColumnId,
    /// Task name.
    pub name: String,
    /// Description, if any.
    pub description: Option<String>,
    /// Preceding task, if any.
    pub predecessor_id: Option<TaskId>,
    /// Following task, if any.
    pub successor_id: Option<TaskId>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// External view of a whole board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// The project.
    pub project: ProjectView,
    /// Columns from head to tail, each with its tasks.
    pub columns: Vec<ColumnView>,
}

/// External view of a cascading delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionView {
    /// Columns removed.
    pub columns_removed: usize,
    /// Tasks removed.
    pub tasks_removed: usize,
}

impl From<&Project> for ProjectView {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id(),
            name: project.name().to_string(),
            owner: project.owner().to_string(),
            created_at: project.created_at(),
            updated_at: project.updated_at(),
        }
    }
}

impl From<&Column> for ColumnView {
    fn from(column: &Column) -> Self {
        Self {
            id: column.id(),
            project_id: column.project_id(),
            name: column.name().to_string(),
            predecessor_id: column.predecessor(),
            successor_id: column.successor(),
            created_at: column.created_at(),
            updated_at: column.updated_at(),
            tasks: Vec::new(),
        }
    }
}

impl From<&BoardColumn> for ColumnView {
    fn from(entry: &BoardColumn) -> Self {
        Self {
            tasks: entry.tasks.iter().map(TaskView::from).collect(),
            ..Self::from(&entry.column)
        }
    }
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            column_id: task.column_id(),
            name: task.name().to_string(),
            description: task.description().map(str::to_owned),
            predecessor_id: task.predecessor(),
            successor_id: task.successor(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

impl From<&Board> for BoardView {
    fn from(board: &Board) -> Self {
        Self {
            project: ProjectView::from(&board.project),
            columns: board.columns.iter().map(ColumnView::from).collect(),
        }
    }
}

impl From<DeletionSummary> for DeletionView {
    fn from(summary: DeletionSummary) -> Self {
        Self {
            columns_removed: summary.columns,
            tasks_removed: summary.tasks,
        }
    }
}
