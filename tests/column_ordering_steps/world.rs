//! Shared world state for column ordering BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryBoardRepository,
    config::BoardLimits,
    domain::{ColumnId, OwnerName, ProjectId},
    services::{BoardServiceError, ColumnService, ProjectService},
};

/// Scenario world for column ordering behaviour tests.
pub struct ColumnOrderingWorld {
    pub projects: ProjectService<InMemoryBoardRepository, DefaultClock>,
    pub columns: ColumnService<InMemoryBoardRepository, DefaultClock>,
    pub owner: OwnerName,
    pub project: Option<ProjectId>,
    pub column_ids: HashMap<String, ColumnId>,
    pub last_error: Option<BoardServiceError>,
}

impl ColumnOrderingWorld {
    /// Creates a world over an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryBoardRepository::new());
        let clock = Arc::new(DefaultClock);
        Self {
            projects: ProjectService::new(Arc::clone(&repository), Arc::clone(&clock)),
            columns: ColumnService::new(repository, clock, BoardLimits::default()),
            owner: OwnerName::new("ada").unwrap_or_else(|err| panic!("valid owner: {err}")),
            project: None,
            column_ids: HashMap::new(),
            last_error: None,
        }
    }

    /// Returns the scenario project.
    ///
    /// # Errors
    ///
    /// Returns an error when no project was created yet.
    pub fn project(&self) -> Result<ProjectId, eyre::Report> {
        self.project
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }

    /// Resolves a column created earlier in the scenario by name.
    ///
    /// # Errors
    ///
    /// Returns an error when no column has that name.
    pub fn column(&self, name: &str) -> Result<ColumnId, eyre::Report> {
        self.column_ids
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown column {name} in scenario world"))
    }
}

impl Default for ColumnOrderingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ColumnOrderingWorld {
    ColumnOrderingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Splits a comma-separated list of column names.
pub fn split_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}
