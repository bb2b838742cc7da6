//! In-memory board repository for tests and embedded use.

mod repository;
mod transaction;

pub use repository::InMemoryBoardRepository;
