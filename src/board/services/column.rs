//! Column creation, renaming, ordering and removal.

use super::access::{owned_column, owned_project};
use super::error::{BoardServiceError, BoardServiceResult, on_duplicate};
use crate::board::config::BoardLimits;
use crate::board::domain::{Column, ColumnId, ColumnName, OwnerName, ProjectId};
use crate::board::ports::BoardRepository;
use crate::ordering::{self, ChainError};
use mockable::Clock;
use std::sync::Arc;
use tracing::{info, instrument};

/// Column orchestration service.
///
/// Columns of a project form one chain maintained by [`crate::ordering`].
#[derive(Clone)]
pub struct ColumnService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync + 'static,
{
    repository: Arc<R>,
    clock: Arc<C>,
    limits: BoardLimits,
}

impl<R, C> ColumnService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync + 'static,
{
    /// Creates a new column service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>, limits: BoardLimits) -> Self {
        Self {
            repository,
            clock,
            limits,
        }
    }

    /// Appends a new column to the end of a project.
    ///
    /// # Errors
    ///
    /// - [`BoardServiceError::ProjectNotFound`] when the caller does not own
    ///   the project.
    /// - [`BoardServiceError::Domain`] for an invalid name.
    /// - [`BoardServiceError::ScopeFull`] when the project is at capacity.
    /// - [`BoardServiceError::DuplicateColumnName`] when the name is taken,
    ///   ignoring case.
    #[instrument(skip_all, fields(owner = %owner, project = %project_id))]
    pub async fn create(
        &self,
        owner: &OwnerName,
        project_id: ProjectId,
        name: &str,
    ) -> BoardServiceResult<Column> {
        let caller = owner.clone();
        let requested = name.to_owned();
        let clock = Arc::clone(&self.clock);
        let limit = self.limits.max_columns_per_project;

        let created = self
            .repository
            .transaction(move |tx| -> BoardServiceResult<Column> {
                owned_project(tx, &caller, project_id)?;
                let column_name = ColumnName::new(&requested)?;
                let siblings = tx.columns_of(project_id)?;
                if siblings.len() >= limit {
                    return Err(BoardServiceError::ScopeFull {
                        scope: format!("project {project_id}"),
                        limit,
                    });
                }
                if siblings
                    .iter()
                    .any(|sibling| sibling.name().collides_with(&column_name))
                {
                    return Err(duplicate_name(&column_name));
                }
                let column = Column::new(project_id, column_name.clone(), &*clock);
                let created_at = column.created_at();
                ordering::append(tx, column, created_at)
                    .map_err(|err| map_duplicate(err, &column_name))
            })
            .await?;

        info!(column = %created.id(), "column created");
        Ok(created)
    }

    /// Lists a project's columns from head to tail.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::ProjectNotFound`], or
    /// [`BoardServiceError::Corrupted`] when the stored chain is malformed.
    #[instrument(skip_all, fields(owner = %owner, project = %project_id))]
    pub async fn list(
        &self,
        owner: &OwnerName,
        project_id: ProjectId,
    ) -> BoardServiceResult<Vec<Column>> {
        let caller = owner.clone();
        self.repository
            .transaction(move |tx| -> BoardServiceResult<Vec<Column>> {
                owned_project(tx, &caller, project_id)?;
                Ok(ordering::list_scope::<Column, _>(tx, project_id)?)
            })
            .await
    }

    /// Renames a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::ColumnNotFound`],
    /// [`BoardServiceError::Domain`] or
    /// [`BoardServiceError::DuplicateColumnName`].
    #[instrument(skip_all, fields(owner = %owner, column = %column_id))]
    pub async fn rename(
        &self,
        owner: &OwnerName,
        column_id: ColumnId,
        name: &str,
    ) -> BoardServiceResult<Column> {
        let caller = owner.clone();
        let requested = name.to_owned();
        let clock = Arc::clone(&self.clock);

        let renamed = self
            .repository
            .transaction(move |tx| -> BoardServiceResult<Column> {
                let mut column = owned_column(tx, &caller, column_id)?;
                let column_name = ColumnName::new(&requested)?;
                let taken = tx.columns_of(column.project_id())?.iter().any(|sibling| {
                    sibling.id() != column_id && sibling.name().collides_with(&column_name)
                });
                if taken {
                    return Err(duplicate_name(&column_name));
                }
                column.rename(column_name.clone(), clock.utc());
                tx.update_column(&column)
                    .map_err(|err| on_duplicate(err, || duplicate_name(&column_name)))?;
                Ok(column)
            })
            .await?;

        info!("column renamed");
        Ok(renamed)
    }

    /// Moves a column to the head of its project (`after` is `None`) or
    /// directly after another column of the same project.
    ///
    /// Moving a column to the position it already occupies writes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::ColumnNotFound`] when either column is
    /// missing, or [`BoardServiceError::InvalidMove`] for a self or
    /// cross-project move.
    #[instrument(skip_all, fields(owner = %owner, column = %column_id, after = ?after))]
    pub async fn reposition(
        &self,
        owner: &OwnerName,
        column_id: ColumnId,
        after: Option<ColumnId>,
    ) -> BoardServiceResult<Column> {
        let caller = owner.clone();
        let clock = Arc::clone(&self.clock);

        let moved = self
            .repository
            .transaction(move |tx| -> BoardServiceResult<Column> {
                owned_column(tx, &caller, column_id)?;
                Ok(ordering::reposition::<Column, _>(
                    tx,
                    column_id,
                    after,
                    clock.utc(),
                )?)
            })
            .await?;

        info!(predecessor = ?moved.predecessor(), "column repositioned");
        Ok(moved)
    }

    /// Deletes a column and its tasks, re-linking its neighbours. Returns the
    /// number of tasks removed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::ColumnNotFound`] or a store error. On
    /// error nothing is removed.
    #[instrument(skip_all, fields(owner = %owner, column = %column_id))]
    pub async fn delete(&self, owner: &OwnerName, column_id: ColumnId) -> BoardServiceResult<usize> {
        let caller = owner.clone();
        let clock = Arc::clone(&self.clock);

        let removed_tasks = self
            .repository
            .transaction(move |tx| -> BoardServiceResult<usize> {
                owned_column(tx, &caller, column_id)?;
                let removed = tx.remove_tasks_of(column_id)?;
                ordering::delete::<Column, _>(tx, column_id, clock.utc())?;
                Ok(removed)
            })
            .await?;

        info!(tasks = removed_tasks, "column deleted");
        Ok(removed_tasks)
    }
}

fn duplicate_name(name: &ColumnName) -> BoardServiceError {
    BoardServiceError::DuplicateColumnName(name.to_string())
}

fn map_duplicate(err: ChainError<ColumnId>, name: &ColumnName) -> BoardServiceError {
    match err {
        ChainError::Store(store) => on_duplicate(store, || duplicate_name(name)),
        other => other.into(),
    }
}
