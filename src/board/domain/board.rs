//! Read models assembled from several records.

use super::{Column, Project, Task};

/// A project with its columns and tasks, each in chain order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// The project being rendered.
    pub project: Project,
    /// Columns from head to tail.
    pub columns: Vec<BoardColumn>,
}

/// A column with its tasks in chain order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn {
    /// The column record.
    pub column: Column,
    /// Tasks from head to tail.
    pub tasks: Vec<Task>,
}

/// Number of records removed by a cascading delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletionSummary {
    /// Columns removed.
    pub columns: usize,
    /// Tasks removed.
    pub tasks: usize,
}
