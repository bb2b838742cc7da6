//! `PostgreSQL` repository running each unit of work in a serializable
//! transaction.

use super::transaction::{PgBoardTransaction, map_diesel_error};
use crate::board::config::PoolSettings;
use crate::board::ports::{BoardRepository, BoardTransaction};
use crate::ordering::{StoreError, StoreResult};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error as DieselError;
use tracing::debug;

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// SQL creating the board tables, indexes and constraints.
pub const BOARD_SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_board_tables/up.sql");

/// `PostgreSQL`-backed board repository.
#[derive(Debug, Clone)]
pub struct PostgresBoardRepository {
    pool: BoardPgPool,
}

/// Failure raised inside a Diesel transaction closure.
enum TxError<E> {
    Work(E),
    Diesel(DieselError),
}

impl<E> From<DieselError> for TxError<E> {
    fn from(err: DieselError) -> Self {
        Self::Diesel(err)
    }
}

impl PostgresBoardRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    /// Builds a connection pool for `database_url` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] when the pool cannot be built.
    pub fn connect(database_url: &str, settings: &PoolSettings) -> StoreResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder()
            .max_size(settings.max_size)
            .connection_timeout(settings.connection_timeout())
            .build(manager)
            .map_err(StoreError::persistence)?;
        Ok(Self::new(pool))
    }

    /// Creates the board tables in the connected database.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when a connection cannot be obtained or the
    /// schema statements fail, for example because the tables already exist.
    pub async fn install_schema(&self) -> StoreResult<()> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> StoreResult<()> {
            let mut connection = pool.get().map_err(StoreError::persistence)?;
            connection
                .batch_execute(BOARD_SCHEMA_SQL)
                .map_err(map_diesel_error)
        })
        .await
        .map_err(StoreError::persistence)?
    }
}

#[async_trait]
impl BoardRepository for PostgresBoardRepository {
    async fn transaction<T, E, F>(&self, work: F) -> Result<T, E>
    where
        F: FnOnce(&mut dyn BoardTransaction) -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: From<StoreError> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<T, E> {
            let mut connection = pool.get().map_err(StoreError::persistence)?;
            let outcome = connection
                .build_transaction()
                .serializable()
                .run(|conn| {
                    let mut tx = PgBoardTransaction::new(conn);
                    work(&mut tx).map_err(TxError::Work)
                });
            match outcome {
                Ok(value) => {
                    debug!("board transaction committed");
                    Ok(value)
                }
                Err(TxError::Work(err)) => Err(err),
                Err(TxError::Diesel(err)) => Err(E::from(map_diesel_error(err))),
            }
        })
        .await
        .map_err(|err| E::from(StoreError::persistence(err)))?
    }
}
