//! Project lifecycle and board assembly.

use super::access::owned_project;
use super::error::{BoardServiceError, BoardServiceResult, on_duplicate};
use crate::board::domain::{
    Board, BoardColumn, Column, DeletionSummary, OwnerName, Project, ProjectId, ProjectName, Task,
};
use crate::board::ports::BoardRepository;
use crate::ordering;
use mockable::Clock;
use std::sync::Arc;
use tracing::{info, instrument};

/// Project orchestration service.
#[derive(Clone)]
pub struct ProjectService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync + 'static,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ProjectService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync + 'static,
{
    /// Creates a new project service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a project owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for an invalid name,
    /// [`BoardServiceError::DuplicateProjectName`] when the owner already has
    /// a project with the same name, or a store error.
    #[instrument(skip_all, fields(owner = %owner))]
    pub async fn create(&self, owner: &OwnerName, name: &str) -> BoardServiceResult<Project> {
        let project = Project::new(owner.clone(), ProjectName::new(name)?, &*self.clock);

        let created = self
            .repository
            .transaction(move |tx| -> BoardServiceResult<Project> {
                let taken = tx
                    .projects_of(project.owner())?
                    .iter()
                    .any(|existing| existing.name() == project.name());
                if taken {
                    return Err(duplicate_name(&project));
                }
                tx.insert_project(&project)
                    .map_err(|err| on_duplicate(err, || duplicate_name(&project)))?;
                Ok(project)
            })
            .await?;

        info!(project = %created.id(), "project created");
        Ok(created)
    }

    /// Lists the owner's projects by creation time, optionally keeping only
    /// names that start with `prefix` ignoring case. A blank prefix keeps
    /// every project.
    ///
    /// # Errors
    ///
    /// Returns a store error when the scan fails.
    #[instrument(skip_all, fields(owner = %owner))]
    pub async fn list(
        &self,
        owner: &OwnerName,
        prefix: Option<&str>,
    ) -> BoardServiceResult<Vec<Project>> {
        let caller = owner.clone();
        let filter = prefix
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_owned);

        self.repository
            .transaction(move |tx| -> BoardServiceResult<Vec<Project>> {
                let projects = tx.projects_of(&caller)?;
                Ok(match filter {
                    Some(text) => projects
                        .into_iter()
                        .filter(|project| project.name().starts_with_ignoring_case(&text))
                        .collect(),
                    None => projects,
                })
            })
            .await
    }

    /// Returns one of the owner's projects.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::ProjectNotFound`] when the project is
    /// absent or owned by someone else.
    #[instrument(skip_all, fields(owner = %owner, project = %id))]
    pub async fn get(&self, owner: &OwnerName, id: ProjectId) -> BoardServiceResult<Project> {
        let caller = owner.clone();
        self.repository
            .transaction(move |tx| owned_project(tx, &caller, id))
            .await
    }

    /// Renames a project.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::ProjectNotFound`],
    /// [`BoardServiceError::Domain`] or
    /// [`BoardServiceError::DuplicateProjectName`].
    #[instrument(skip_all, fields(owner = %owner, project = %id))]
    pub async fn rename(
        &self,
        owner: &OwnerName,
        id: ProjectId,
        name: &str,
    ) -> BoardServiceResult<Project> {
        let caller = owner.clone();
        let requested = name.to_owned();
        let clock = Arc::clone(&self.clock);

        let renamed = self
            .repository
            .transaction(move |tx| -> BoardServiceResult<Project> {
                let mut project = owned_project(tx, &caller, id)?;
                let new_name = ProjectName::new(&requested)?;
                let taken = tx.projects_of(&caller)?.iter().any(|existing| {
                    existing.id() != id && existing.name() == &new_name
                });
                if taken {
                    return Err(BoardServiceError::DuplicateProjectName(new_name.to_string()));
                }
                project.rename(new_name, clock.utc());
                tx.update_project(&project)
                    .map_err(|err| on_duplicate(err, || duplicate_name(&project)))?;
                Ok(project)
            })
            .await?;

        info!("project renamed");
        Ok(renamed)
    }

    /// Deletes a project together with all of its columns and tasks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::ProjectNotFound`] or a store error. On
    /// error nothing is removed.
    #[instrument(skip_all, fields(owner = %owner, project = %id))]
    pub async fn delete(
        &self,
        owner: &OwnerName,
        id: ProjectId,
    ) -> BoardServiceResult<DeletionSummary> {
        let caller = owner.clone();

        let summary = self
            .repository
            .transaction(move |tx| -> BoardServiceResult<DeletionSummary> {
                owned_project(tx, &caller, id)?;
                let mut summary = DeletionSummary::default();
                for column in tx.columns_of(id)? {
                    summary.tasks += tx.remove_tasks_of(column.id())?;
                }
                summary.columns = tx.remove_columns_of(id)?;
                tx.remove_project(id)?;
                Ok(summary)
            })
            .await?;

        info!(
            columns = summary.columns,
            tasks = summary.tasks,
            "project deleted"
        );
        Ok(summary)
    }

    /// Returns the project with its columns and tasks in chain order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::ProjectNotFound`], or
    /// [`BoardServiceError::Corrupted`] when a stored chain is malformed.
    #[instrument(skip_all, fields(owner = %owner, project = %id))]
    pub async fn board(&self, owner: &OwnerName, id: ProjectId) -> BoardServiceResult<Board> {
        let caller = owner.clone();
        self.repository
            .transaction(move |tx| -> BoardServiceResult<Board> {
                let project = owned_project(tx, &caller, id)?;
                let columns = ordering::list_scope::<Column, _>(tx, id)?;
                let mut board_columns = Vec::with_capacity(columns.len());
                for column in columns {
                    let tasks = ordering::list_scope::<Task, _>(tx, column.id())?;
                    board_columns.push(BoardColumn { column, tasks });
                }
                Ok(Board {
                    project,
                    columns: board_columns,
                })
            })
            .await
    }
}

fn duplicate_name(project: &Project) -> BoardServiceError {
    BoardServiceError::DuplicateProjectName(project.name().to_string())
}
