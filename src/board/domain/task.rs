//! Task record, chained within its column.

use super::{ColumnId, TaskId, TaskName};
use crate::ordering::{ChainLinks, ChainNode};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// A unit of work within a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    column_id: ColumnId,
    name: TaskName,
    description: Option<String>,
    links: ChainLinks<TaskId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning column.
    pub column_id: ColumnId,
    /// Persisted task name.
    pub name: TaskName,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted predecessor task, if any.
    pub predecessor: Option<TaskId>,
    /// Persisted successor task, if any.
    pub successor: Option<TaskId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates an unlinked task in `column_id`.
    ///
    /// Blank descriptions are stored as absent.
    #[must_use]
    pub fn new(
        column_id: ColumnId,
        name: TaskName,
        description: Option<&str>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            column_id,
            name,
            description: normalize_description(description),
            links: ChainLinks::detached(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            column_id: data.column_id,
            name: data.name,
            description: data.description,
            links: ChainLinks::new(data.predecessor, data.successor),
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning column.
    #[must_use]
    pub const fn column_id(&self) -> ColumnId {
        self.column_id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the preceding task, if any.
    #[must_use]
    pub const fn predecessor(&self) -> Option<TaskId> {
        self.links.predecessor
    }

    /// Returns the following task, if any.
    #[must_use]
    pub const fn successor(&self) -> Option<TaskId> {
        self.links.successor
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Renames the task.
    pub fn rename(&mut self, name: TaskName, at: DateTime<Utc>) {
        self.name = name;
        self.updated_at = at;
    }

    /// Replaces the description. A blank description clears it.
    pub fn describe(&mut self, description: &str, at: DateTime<Utc>) {
        self.description = normalize_description(Some(description));
        self.updated_at = at;
    }
}

impl ChainNode for Task {
    type Id = TaskId;
    type ScopeId = ColumnId;

    fn id(&self) -> TaskId {
        self.id
    }

    fn scope_id(&self) -> ColumnId {
        self.column_id
    }

    fn links(&self) -> ChainLinks<TaskId> {
        self.links
    }

    fn relink(&mut self, links: ChainLinks<TaskId>, at: DateTime<Utc>) {
        self.links = links;
        self.updated_at = at;
    }
}

fn normalize_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}
