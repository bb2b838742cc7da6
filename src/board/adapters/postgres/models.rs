//! Diesel row models and their conversions to board records.

use super::schema::{board_columns, board_tasks, projects};
use crate::board::domain::{
    Column, ColumnId, ColumnName, OwnerName, PersistedColumnData, PersistedProjectData,
    PersistedTaskData, Project, ProjectId, ProjectName, Task, TaskId, TaskName,
};
use crate::ordering::{StoreError, StoreResult};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// Query result row for projects.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Project identifier.
    pub id: Uuid,
    /// Owner identity.
    pub owner: String,
    /// Project name.
    pub name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for projects.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProjectRow {
    /// Project identifier.
    pub id: Uuid,
    /// Owner identity.
    pub owner: String,
    /// Project name.
    pub name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for columns.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = board_columns)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ColumnRow {
    /// Column identifier.
    pub id: Uuid,
    /// Owning project.
    pub project_id: Uuid,
    /// Column name.
    pub name: String,
    /// Preceding column.
    pub predecessor_id: Option<Uuid>,
    /// Following column.
    pub successor_id: Option<Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for columns.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = board_columns)]
pub struct NewColumnRow {
    /// Column identifier.
    pub id: Uuid,
    /// Owning project.
    pub project_id: Uuid,
    /// Column name.
    pub name: String,
    /// Preceding column.
    pub predecessor_id: Option<Uuid>,
    /// Following column.
    pub successor_id: Option<Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for tasks.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = board_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: Uuid,
    /// Owning column.
    pub column_id: Uuid,
    /// Task name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Preceding task.
    pub predecessor_id: Option<Uuid>,
    /// Following task.
    pub successor_id: Option<Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for tasks.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = board_tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: Uuid,
    /// Owning column.
    pub column_id: Uuid,
    /// Task name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Preceding task.
    pub predecessor_id: Option<Uuid>,
    /// Following task.
    pub successor_id: Option<Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Project> for NewProjectRow {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().into_inner(),
            owner: project.owner().as_str().to_owned(),
            name: project.name().as_str().to_owned(),
            created_at: project.created_at(),
            updated_at: project.updated_at(),
        }
    }
}

impl From<&Column> for NewColumnRow {
    fn from(column: &Column) -> Self {
        Self {
            id: column.id().into_inner(),
            project_id: column.project_id().into_inner(),
            name: column.name().as_str().to_owned(),
            predecessor_id: column.predecessor().map(ColumnId::into_inner),
            successor_id: column.successor().map(ColumnId::into_inner),
            created_at: column.created_at(),
            updated_at: column.updated_at(),
        }
    }
}

impl From<&Task> for NewTaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().into_inner(),
            column_id: task.column_id().into_inner(),
            name: task.name().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            predecessor_id: task.predecessor().map(TaskId::into_inner),
            successor_id: task.successor().map(TaskId::into_inner),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

impl TryFrom<ProjectRow> for Project {
    type Error = StoreError;

    fn try_from(row: ProjectRow) -> StoreResult<Self> {
        Ok(Self::from_persisted(PersistedProjectData {
            id: ProjectId::from_uuid(row.id),
            owner: OwnerName::new(row.owner).map_err(StoreError::invalid_persisted_data)?,
            name: ProjectName::new(row.name).map_err(StoreError::invalid_persisted_data)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }))
    }
}

impl TryFrom<ColumnRow> for Column {
    type Error = StoreError;

    fn try_from(row: ColumnRow) -> StoreResult<Self> {
        Ok(Self::from_persisted(PersistedColumnData {
            id: ColumnId::from_uuid(row.id),
            project_id: ProjectId::from_uuid(row.project_id),
            name: ColumnName::new(row.name).map_err(StoreError::invalid_persisted_data)?,
            predecessor: row.predecessor_id.map(ColumnId::from_uuid),
            successor: row.successor_id.map(ColumnId::from_uuid),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }))
    }
}

impl TryFrom<TaskRow> for Task {
    type Error = StoreError;

    fn try_from(row: TaskRow) -> StoreResult<Self> {
        Ok(Self::from_persisted(PersistedTaskData {
            id: TaskId::from_uuid(row.id),
            column_id: ColumnId::from_uuid(row.column_id),
            name: TaskName::new(row.name).map_err(StoreError::invalid_persisted_data)?,
            description: row.description,
            predecessor: row.predecessor_id.map(TaskId::from_uuid),
            successor: row.successor_id.map(TaskId::from_uuid),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }))
    }
}
