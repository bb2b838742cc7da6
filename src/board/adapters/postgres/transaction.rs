//! Diesel-backed implementation of the board transaction handle.

use super::models::{ColumnRow, NewColumnRow, NewProjectRow, NewTaskRow, ProjectRow, TaskRow};
use super::schema::{board_columns, board_tasks, projects};
use crate::board::domain::{Column, ColumnId, OwnerName, Project, ProjectId, Task, TaskId};
use crate::board::ports::BoardTransaction;
use crate::ordering::{ChainStore, StoreError, StoreResult};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::warn;

/// Store handle wrapping a connection with an open serializable transaction.
pub(super) struct PgBoardTransaction<'conn> {
    connection: &'conn mut PgConnection,
}

impl<'conn> PgBoardTransaction<'conn> {
    pub(super) const fn new(connection: &'conn mut PgConnection) -> Self {
        Self { connection }
    }
}

/// Maps Diesel failures onto the store error taxonomy.
pub(super) fn map_diesel_error(err: DieselError) -> StoreError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::SerializationFailure, _) => {
            warn!(error = %err, "transaction aborted by concurrent modification");
            StoreError::conflict(err)
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info) => {
            StoreError::UniqueViolation {
                constraint: info.constraint_name().unwrap_or("unknown").to_owned(),
            }
        }
        other => StoreError::persistence(other),
    }
}

fn expect_one_row(affected: usize, id: impl ToString) -> StoreResult<()> {
    if affected == 0 {
        return Err(StoreError::missing_record(id));
    }
    Ok(())
}

fn convert_all<R, N>(rows: Vec<R>) -> StoreResult<Vec<N>>
where
    N: TryFrom<R, Error = StoreError>,
{
    rows.into_iter().map(N::try_from).collect()
}

impl ChainStore<Column> for PgBoardTransaction<'_> {
    fn find(&mut self, id: ColumnId) -> StoreResult<Option<Column>> {
        board_columns::table
            .find(id.into_inner())
            .select(ColumnRow::as_select())
            .first::<ColumnRow>(self.connection)
            .optional()
            .map_err(map_diesel_error)?
            .map(Column::try_from)
            .transpose()
    }

    fn members(&mut self, scope: ProjectId) -> StoreResult<Vec<Column>> {
        let rows = board_columns::table
            .filter(board_columns::project_id.eq(scope.into_inner()))
            .order(board_columns::id.asc())
            .select(ColumnRow::as_select())
            .for_update()
            .load::<ColumnRow>(self.connection)
            .map_err(map_diesel_error)?;
        convert_all(rows)
    }

    fn insert(&mut self, node: &Column) -> StoreResult<()> {
        diesel::insert_into(board_columns::table)
            .values(NewColumnRow::from(node))
            .execute(self.connection)
            .map_err(map_diesel_error)?;
        Ok(())
    }

    fn update_links(&mut self, nodes: &[Column]) -> StoreResult<()> {
        for node in nodes {
            let affected = diesel::update(board_columns::table.find(node.id().into_inner()))
                .set((
                    board_columns::predecessor_id.eq(node.predecessor().map(ColumnId::into_inner)),
                    board_columns::successor_id.eq(node.successor().map(ColumnId::into_inner)),
                    board_columns::updated_at.eq(node.updated_at()),
                ))
                .execute(self.connection)
                .map_err(map_diesel_error)?;
            expect_one_row(affected, node.id())?;
        }
        Ok(())
    }

    fn remove(&mut self, id: ColumnId) -> StoreResult<()> {
        let affected = diesel::delete(board_columns::table.find(id.into_inner()))
            .execute(self.connection)
            .map_err(map_diesel_error)?;
        expect_one_row(affected, id)
    }

    fn remove_scope(&mut self, scope: ProjectId) -> StoreResult<usize> {
        diesel::delete(board_columns::table.filter(board_columns::project_id.eq(scope.into_inner())))
            .execute(self.connection)
            .map_err(map_diesel_error)
    }
}

impl ChainStore<Task> for PgBoardTransaction<'_> {
    fn find(&mut self, id: TaskId) -> StoreResult<Option<Task>> {
        board_tasks::table
            .find(id.into_inner())
            .select(TaskRow::as_select())
            .first::<TaskRow>(self.connection)
            .optional()
            .map_err(map_diesel_error)?
            .map(Task::try_from)
            .transpose()
    }

    fn members(&mut self, scope: ColumnId) -> StoreResult<Vec<Task>> {
        let rows = board_tasks::table
            .filter(board_tasks::column_id.eq(scope.into_inner()))
            .order(board_tasks::id.asc())
            .select(TaskRow::as_select())
            .for_update()
            .load::<TaskRow>(self.connection)
            .map_err(map_diesel_error)?;
        convert_all(rows)
    }

    fn insert(&mut self, node: &Task) -> StoreResult<()> {
        diesel::insert_into(board_tasks::table)
            .values(NewTaskRow::from(node))
            .execute(self.connection)
            .map_err(map_diesel_error)?;
        Ok(())
    }

    fn update_links(&mut self, nodes: &[Task]) -> StoreResult<()> {
        for node in nodes {
            let affected = diesel::update(board_tasks::table.find(node.id().into_inner()))
                .set((
                    board_tasks::predecessor_id.eq(node.predecessor().map(TaskId::into_inner)),
                    board_tasks::successor_id.eq(node.successor().map(TaskId::into_inner)),
                    board_tasks::updated_at.eq(node.updated_at()),
                ))
                .execute(self.connection)
                .map_err(map_diesel_error)?;
            expect_one_row(affected, node.id())?;
        }
        Ok(())
    }

    fn remove(&mut self, id: TaskId) -> StoreResult<()> {
        let affected = diesel::delete(board_tasks::table.find(id.into_inner()))
            .execute(self.connection)
            .map_err(map_diesel_error)?;
        expect_one_row(affected, id)
    }

    fn remove_scope(&mut self, scope: ColumnId) -> StoreResult<usize> {
        diesel::delete(board_tasks::table.filter(board_tasks::column_id.eq(scope.into_inner())))
            .execute(self.connection)
            .map_err(map_diesel_error)
    }
}

impl BoardTransaction for PgBoardTransaction<'_> {
    fn find_project(&mut self, id: ProjectId) -> StoreResult<Option<Project>> {
        projects::table
            .find(id.into_inner())
            .select(ProjectRow::as_select())
            .first::<ProjectRow>(self.connection)
            .optional()
            .map_err(map_diesel_error)?
            .map(Project::try_from)
            .transpose()
    }

    fn projects_of(&mut self, owner: &OwnerName) -> StoreResult<Vec<Project>> {
        let rows = projects::table
            .filter(projects::owner.eq(owner.as_str()))
            .order((projects::created_at.asc(), projects::id.asc()))
            .select(ProjectRow::as_select())
            .load::<ProjectRow>(self.connection)
            .map_err(map_diesel_error)?;
        convert_all(rows)
    }

    fn insert_project(&mut self, project: &Project) -> StoreResult<()> {
        diesel::insert_into(projects::table)
            .values(NewProjectRow::from(project))
            .execute(self.connection)
            .map_err(map_diesel_error)?;
        Ok(())
    }

    fn update_project(&mut self, project: &Project) -> StoreResult<()> {
        let affected = diesel::update(projects::table.find(project.id().into_inner()))
            .set((
                projects::name.eq(project.name().as_str()),
                projects::updated_at.eq(project.updated_at()),
            ))
            .execute(self.connection)
            .map_err(map_diesel_error)?;
        expect_one_row(affected, project.id())
    }

    fn remove_project(&mut self, id: ProjectId) -> StoreResult<()> {
        let affected = diesel::delete(projects::table.find(id.into_inner()))
            .execute(self.connection)
            .map_err(map_diesel_error)?;
        expect_one_row(affected, id)
    }

    fn update_column(&mut self, column: &Column) -> StoreResult<()> {
        let affected = diesel::update(board_columns::table.find(column.id().into_inner()))
            .set((
                board_columns::name.eq(column.name().as_str()),
                board_columns::updated_at.eq(column.updated_at()),
            ))
            .execute(self.connection)
            .map_err(map_diesel_error)?;
        expect_one_row(affected, column.id())
    }

    fn update_task(&mut self, task: &Task) -> StoreResult<()> {
        let affected = diesel::update(board_tasks::table.find(task.id().into_inner()))
            .set((
                board_tasks::name.eq(task.name().as_str()),
                board_tasks::description.eq(task.description().map(str::to_owned)),
                board_tasks::updated_at.eq(task.updated_at()),
            ))
            .execute(self.connection)
            .map_err(map_diesel_error)?;
        expect_one_row(affected, task.id())
    }
}
