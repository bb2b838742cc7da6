//! Column record, chained within its project.

use super::{ColumnId, ColumnName, ProjectId};
use crate::ordering::{ChainLinks, ChainNode};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// A work state within a project.
///
/// Columns of one project form a single chain through their predecessor and
/// successor links. The owning project never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    id: ColumnId,
    project_id: ProjectId,
    name: ColumnName,
    links: ChainLinks<ColumnId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedColumnData {
    /// Persisted column identifier.
    pub id: ColumnId,
    /// Persisted owning project.
    pub project_id: ProjectId,
    /// Persisted column name.
    pub name: ColumnName,
    /// Persisted predecessor column, if any.
    pub predecessor: Option<ColumnId>,
    /// Persisted successor column, if any.
    pub successor: Option<ColumnId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Column {
    /// Creates an unlinked column in `project_id`.
    ///
    /// The ordering engine assigns links when the column is appended.
    #[must_use]
    pub fn new(project_id: ProjectId, name: ColumnName, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: ColumnId::new(),
            project_id,
            name,
            links: ChainLinks::detached(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a column from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedColumnData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            name: data.name,
            links: ChainLinks::new(data.predecessor, data.successor),
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the column name.
    #[must_use]
    pub const fn name(&self) -> &ColumnName {
        &self.name
    }

    /// Returns the preceding column, if any.
    #[must_use]
    pub const fn predecessor(&self) -> Option<ColumnId> {
        self.links.predecessor
    }

    /// Returns the following column, if any.
    #[must_use]
    pub const fn successor(&self) -> Option<ColumnId> {
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

    /// Renames the column.
    pub fn rename(&mut self, name: ColumnName, at: DateTime<Utc>) {
        self.name = name;
        self.updated_at = at;
    }
}

impl ChainNode for Column {
    type Id = ColumnId;
    type ScopeId = ProjectId;

    fn id(&self) -> ColumnId {
        self.id
    }

    fn scope_id(&self) -> ProjectId {
        self.project_id
    }

    fn links(&self) -> ChainLinks<ColumnId> {
        self.links
    }

    fn relink(&mut self, links: ChainLinks<ColumnId>, at: DateTime<Utc>) {
        self.links = links;
        self.updated_at = at;
    }
}
