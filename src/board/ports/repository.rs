//! Transactional repository port for projects, columns and tasks.

use crate::board::domain::{Column, ColumnId, OwnerName, Project, ProjectId, Task, TaskId};
use crate::ordering::{ChainStore, StoreError, StoreResult};
use async_trait::async_trait;

/// Board persistence contract.
///
/// All reads and writes happen inside [`BoardRepository::transaction`], so a
/// service operation observes one consistent snapshot and commits its writes
/// atomically.
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Runs `work` inside one store transaction.
    ///
    /// The transaction commits when `work` returns `Ok` and rolls back when
    /// it returns `Err`. Store failures raised while opening or committing
    /// the transaction are converted into `E`.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `work`, or a [`StoreError`] converted
    /// into `E`. Serialization conflicts surface as
    /// [`StoreError::Conflict`].
    async fn transaction<T, E, F>(&self, work: F) -> Result<T, E>
    where
        F: FnOnce(&mut dyn BoardTransaction) -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: From<StoreError> + Send + 'static;
}

/// Store handle valid for one open transaction.
///
/// Column and task chains are reached through the [`ChainStore`]
/// supertraits; project rows and non-link attributes through the methods
/// below.
pub trait BoardTransaction: ChainStore<Column> + ChainStore<Task> {
    /// Loads a project by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the lookup fails.
    fn find_project(&mut self, id: ProjectId) -> StoreResult<Option<Project>>;

    /// Loads every project of `owner`, ordered by creation time.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the scan fails.
    fn projects_of(&mut self, owner: &OwnerName) -> StoreResult<Vec<Project>>;

    /// Inserts a new project.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UniqueViolation`] when the owner already has a
    /// project with the same name.
    fn insert_project(&mut self, project: &Project) -> StoreResult<()>;

    /// Persists a project's name and update timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingRecord`] when the project does not exist,
    /// or [`StoreError::UniqueViolation`] on a name collision.
    fn update_project(&mut self, project: &Project) -> StoreResult<()>;

    /// Removes a project record. Its columns must already be removed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingRecord`] when the project does not exist.
    fn remove_project(&mut self, id: ProjectId) -> StoreResult<()>;

    /// Persists a column's name and update timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingRecord`] when the column does not exist,
    /// or [`StoreError::UniqueViolation`] on a name collision.
    fn update_column(&mut self, column: &Column) -> StoreResult<()>;

    /// Persists a task's name, description and update timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingRecord`] when the task does not exist.
    fn update_task(&mut self, task: &Task) -> StoreResult<()>;

    /// Loads a column by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the lookup fails.
    fn find_column(&mut self, id: ColumnId) -> StoreResult<Option<Column>> {
        ChainStore::<Column>::find(self, id)
    }

    /// Loads a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the lookup fails.
    fn find_task(&mut self, id: TaskId) -> StoreResult<Option<Task>> {
        ChainStore::<Task>::find(self, id)
    }

    /// Loads the columns of a project in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the scan fails.
    fn columns_of(&mut self, project: ProjectId) -> StoreResult<Vec<Column>> {
        ChainStore::<Column>::members(self, project)
    }

    /// Loads the tasks of a column in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the scan fails.
    fn tasks_of(&mut self, column: ColumnId) -> StoreResult<Vec<Task>> {
        ChainStore::<Task>::members(self, column)
    }

    /// Removes every task of a column and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when persistence fails.
    fn remove_tasks_of(&mut self, column: ColumnId) -> StoreResult<usize> {
        ChainStore::<Task>::remove_scope(self, column)
    }

    /// Removes every column of a project and returns how many were removed.
    /// The columns' tasks must already be removed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when persistence fails.
    fn remove_columns_of(&mut self, project: ProjectId) -> StoreResult<usize> {
        ChainStore::<Column>::remove_scope(self, project)
    }
}
