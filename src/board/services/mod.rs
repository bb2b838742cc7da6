//! Orchestration services for projects, columns and tasks.
//!
//! Each operation runs inside exactly one repository transaction and
//! receives the caller's verified [`crate::board::domain::OwnerName`].
//! Records owned by someone else are reported as not found.

mod access;
mod column;
mod error;
mod project;
mod task;

pub use column::ColumnService;
pub use error::{BoardErrorKind, BoardServiceError, BoardServiceResult};
pub use project::ProjectService;
pub use task::{CreateTaskRequest, TaskService, UpdateTaskRequest};
