//! Shared test helpers for `PostgreSQL` integration tests.

use std::future::Future;
use std::sync::Arc;

use super::database::{DATABASE_URL_VAR, TemporaryDatabase};
use mockable::DefaultClock;
use taskboard::board::{
    adapters::postgres::PostgresBoardRepository,
    config::{BoardLimits, PoolSettings},
    domain::{ColumnId, OwnerName, ProjectId},
    services::{BoardServiceResult, ColumnService, ProjectService, TaskService},
};

/// Attempts made before a conflicting operation is reported.
const MAX_ATTEMPTS: usize = 50;

/// Services sharing one repository on a temporary database.
pub struct PreparedBoard {
    pub projects: ProjectService<PostgresBoardRepository, DefaultClock>,
    pub columns: Arc<ColumnService<PostgresBoardRepository, DefaultClock>>,
    pub tasks: Arc<TaskService<PostgresBoardRepository, DefaultClock>>,
    pub owner: OwnerName,
    // Dropped last so pooled connections close before the database goes.
    pub database: TemporaryDatabase,
}

/// Creates a temporary database with the board schema, or returns `None`
/// when no test server is configured.
///
/// # Errors
///
/// Returns an error when the database or the schema cannot be created.
pub async fn prepare_board() -> Result<Option<PreparedBoard>, eyre::Report> {
    let Ok(admin_url) = std::env::var(DATABASE_URL_VAR) else {
        tracing::info!("{DATABASE_URL_VAR} unset; skipping PostgreSQL test");
        return Ok(None);
    };

    let database =
        tokio::task::spawn_blocking(move || TemporaryDatabase::create(&admin_url)).await??;
    let settings = PoolSettings {
        max_size: 8,
        ..PoolSettings::default()
    };
    let repository = Arc::new(PostgresBoardRepository::connect(database.url(), &settings)?);
    repository.install_schema().await?;

    let clock = Arc::new(DefaultClock);
    let limits = BoardLimits::default();
    Ok(Some(PreparedBoard {
        projects: ProjectService::new(Arc::clone(&repository), Arc::clone(&clock)),
        columns: Arc::new(ColumnService::new(
            Arc::clone(&repository),
            Arc::clone(&clock),
            limits,
        )),
        tasks: Arc::new(TaskService::new(repository, clock, limits)),
        owner: OwnerName::new("ada")?,
        database,
    }))
}

impl PreparedBoard {
    /// Creates a project with the given columns, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if any creation fails.
    pub async fn project_with_columns(
        &self,
        name: &str,
        columns: &[&str],
    ) -> Result<(ProjectId, Vec<ColumnId>), eyre::Report> {
        let project = self.projects.create(&self.owner, name).await?.id();
        let mut ids = Vec::with_capacity(columns.len());
        for column in columns {
            ids.push(self.columns.create(&self.owner, project, *column).await?.id());
        }
        Ok((project, ids))
    }

    /// Lists column names of `project` from head to tail.
    ///
    /// # Errors
    ///
    /// Returns an error if listing fails.
    pub async fn column_names(&self, project: ProjectId) -> Result<Vec<String>, eyre::Report> {
        let columns = self.columns.list(&self.owner, project).await?;
        Ok(columns
            .iter()
            .map(|column| column.name().to_string())
            .collect())
    }
}

/// Runs `operation` until it succeeds or fails with a non-retryable error.
///
/// # Errors
///
/// Returns the last error when it is not retryable or attempts run out.
pub async fn with_retries<T, F, Fut>(mut operation: F) -> BoardServiceResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = BoardServiceResult<T>>,
{
    let mut attempt = 1;
    loop {
        match operation().await {
            Err(err) if err.is_retryable() && attempt < MAX_ATTEMPTS => {
                attempt += 1;
                tokio::task::yield_now().await;
            }
            outcome => return outcome,
        }
    }
}
