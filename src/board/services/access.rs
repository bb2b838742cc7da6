//! Ownership checks shared by the services.
//!
//! A record owned by someone else is reported exactly like a missing one.

use super::error::{BoardServiceError, BoardServiceResult};
use crate::board::domain::{Column, ColumnId, OwnerName, Project, ProjectId, Task, TaskId};
use crate::board::ports::BoardTransaction;

pub(super) fn owned_project(
    tx: &mut dyn BoardTransaction,
    owner: &OwnerName,
    id: ProjectId,
) -> BoardServiceResult<Project> {
    tx.find_project(id)?
        .filter(|project| project.is_owned_by(owner))
        .ok_or(BoardServiceError::ProjectNotFound(id))
}

pub(super) fn owned_column(
    tx: &mut dyn BoardTransaction,
    owner: &OwnerName,
    id: ColumnId,
) -> BoardServiceResult<Column> {
    let column = tx
        .find_column(id)?
        .ok_or(BoardServiceError::ColumnNotFound(id))?;
    let owned = tx
        .find_project(column.project_id())?
        .is_some_and(|project| project.is_owned_by(owner));
    if !owned {
        return Err(BoardServiceError::ColumnNotFound(id));
    }
    Ok(column)
}

pub(super) fn owned_task(
    tx: &mut dyn BoardTransaction,
    owner: &OwnerName,
    id: TaskId,
) -> BoardServiceResult<Task> {
    let task = tx
        .find_task(id)?
        .ok_or(BoardServiceError::TaskNotFound(id))?;
    match owned_column(tx, owner, task.column_id()) {
        Ok(_) => Ok(task),
        Err(BoardServiceError::ColumnNotFound(_)) => Err(BoardServiceError::TaskNotFound(id)),
        Err(other) => Err(other),
    }
}
