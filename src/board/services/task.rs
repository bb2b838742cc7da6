//! Task creation, updates, ordering and removal.

use super::access::{owned_column, owned_task};
use super::error::{BoardServiceError, BoardServiceResult};
use crate::board::config::BoardLimits;
use crate::board::domain::{ColumnId, OwnerName, Task, TaskId, TaskName};
use crate::board::ports::BoardRepository;
use crate::ordering;
use mockable::Clock;
use std::sync::Arc;
use tracing::{info, instrument};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    column_id: ColumnId,
    name: String,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request for a task named `name` in `column_id`.
    #[must_use]
    pub fn new(column_id: ColumnId, name: impl Into<String>) -> Self {
        Self {
            column_id,
            name: name.into(),
            description: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for changing a task's name and/or description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    name: Option<String>,
    description: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new task name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the new description. A blank description clears it.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    const fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// Task orchestration service.
///
/// Tasks of a column form one chain maintained by [`crate::ordering`].
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync + 'static,
{
    repository: Arc<R>,
    clock: Arc<C>,
    limits: BoardLimits,
}

impl<R, C> TaskService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync + 'static,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>, limits: BoardLimits) -> Self {
        Self {
            repository,
            clock,
            limits,
        }
    }

    /// Appends a new task to the end of a column.
    ///
    /// # Errors
    ///
    /// - [`BoardServiceError::ColumnNotFound`] when the caller does not own
    ///   the column.
    /// - [`BoardServiceError::Domain`] for an invalid name.
    /// - [`BoardServiceError::DescriptionTooLong`] for an over-long
    ///   description.
    /// - [`BoardServiceError::ScopeFull`] when the column is at capacity.
    #[instrument(skip_all, fields(owner = %owner, column = %request.column_id))]
    pub async fn create(
        &self,
        owner: &OwnerName,
        request: CreateTaskRequest,
    ) -> BoardServiceResult<Task> {
        let caller = owner.clone();
        let clock = Arc::clone(&self.clock);
        let limits = self.limits;

        let created = self
            .repository
            .transaction(move |tx| -> BoardServiceResult<Task> {
                let column_id = request.column_id;
                owned_column(tx, &caller, column_id)?;
                let task_name = TaskName::new(&request.name)?;
                check_description(request.description.as_deref(), &limits)?;
                let siblings = tx.tasks_of(column_id)?;
                if siblings.len() >= limits.max_tasks_per_column {
                    return Err(BoardServiceError::ScopeFull {
                        scope: format!("column {column_id}"),
                        limit: limits.max_tasks_per_column,
                    });
                }
                let task = Task::new(column_id, task_name, request.description.as_deref(), &*clock);
                let created_at = task.created_at();
                Ok(ordering::append(tx, task, created_at)?)
            })
            .await?;

        info!(task = %created.id(), "task created");
        Ok(created)
    }

    /// Lists a column's tasks from head to tail.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::ColumnNotFound`], or
    /// [`BoardServiceError::Corrupted`] when the stored chain is malformed.
    #[instrument(skip_all, fields(owner = %owner, column = %column_id))]
    pub async fn list(
        &self,
        owner: &OwnerName,
        column_id: ColumnId,
    ) -> BoardServiceResult<Vec<Task>> {
        let caller = owner.clone();
        self.repository
            .transaction(move |tx| -> BoardServiceResult<Vec<Task>> {
                owned_column(tx, &caller, column_id)?;
                Ok(ordering::list_scope::<Task, _>(tx, column_id)?)
            })
            .await
    }

    /// Changes a task's name and/or description. Task names need not be
    /// unique.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::EmptyUpdate`] when the request changes
    /// nothing, [`BoardServiceError::TaskNotFound`], or a validation error.
    #[instrument(skip_all, fields(owner = %owner, task = %task_id))]
    pub async fn update(
        &self,
        owner: &OwnerName,
        task_id: TaskId,
        request: UpdateTaskRequest,
    ) -> BoardServiceResult<Task> {
        if request.is_empty() {
            return Err(BoardServiceError::EmptyUpdate);
        }
        let caller = owner.clone();
        let clock = Arc::clone(&self.clock);
        let limits = self.limits;

        let updated = self
            .repository
            .transaction(move |tx| -> BoardServiceResult<Task> {
                let mut task = owned_task(tx, &caller, task_id)?;
                let now = clock.utc();
                if let Some(name) = request.name.as_deref() {
                    task.rename(TaskName::new(name)?, now);
                }
                if let Some(description) = request.description.as_deref() {
                    check_description(Some(description), &limits)?;
                    task.describe(description, now);
                }
                tx.update_task(&task)?;
                Ok(task)
            })
            .await?;

        info!("task updated");
        Ok(updated)
    }

    /// Moves a task to the head of its column (`after` is `None`) or
    /// directly after another task of the same column.
    ///
    /// Moving a task to the position it already occupies writes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::TaskNotFound`] when either task is
    /// missing, or [`BoardServiceError::InvalidMove`] for a self or
    /// cross-column move.
    #[instrument(skip_all, fields(owner = %owner, task = %task_id, after = ?after))]
    pub async fn reposition(
        &self,
        owner: &OwnerName,
        task_id: TaskId,
        after: Option<TaskId>,
    ) -> BoardServiceResult<Task> {
        let caller = owner.clone();
        let clock = Arc::clone(&self.clock);

        let moved = self
            .repository
            .transaction(move |tx| -> BoardServiceResult<Task> {
                owned_task(tx, &caller, task_id)?;
                Ok(ordering::reposition::<Task, _>(
                    tx,
                    task_id,
                    after,
                    clock.utc(),
                )?)
            })
            .await?;

        info!(predecessor = ?moved.predecessor(), "task repositioned");
        Ok(moved)
    }

    /// Deletes a task, re-linking its neighbours.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::TaskNotFound`] or a store error.
    #[instrument(skip_all, fields(owner = %owner, task = %task_id))]
    pub async fn delete(&self, owner: &OwnerName, task_id: TaskId) -> BoardServiceResult<Task> {
        let caller = owner.clone();
        let clock = Arc::clone(&self.clock);

        let removed = self
            .repository
            .transaction(move |tx| -> BoardServiceResult<Task> {
                owned_task(tx, &caller, task_id)?;
                Ok(ordering::delete::<Task, _>(tx, task_id, clock.utc())?)
            })
            .await?;

        info!("task deleted");
        Ok(removed)
    }
}

fn check_description(description: Option<&str>, limits: &BoardLimits) -> BoardServiceResult<()> {
    let actual = description.map_or(0, |text| text.trim().chars().count());
    if actual > limits.max_description_length {
        return Err(BoardServiceError::DescriptionTooLong {
            max: limits.max_description_length,
            actual,
        });
    }
    Ok(())
}
