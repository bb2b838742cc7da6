//! `PostgreSQL` adapter for board persistence.
//!
//! Every unit of work runs on a blocking thread inside a `SERIALIZABLE`
//! transaction. Scope scans lock the member rows, so two operations touching
//! the same chain either serialize or one of them fails with
//! [`crate::ordering::StoreError::Conflict`].

mod models;
mod repository;
mod schema;
mod transaction;

pub use repository::{BOARD_SCHEMA_SQL, BoardPgPool, PostgresBoardRepository};
