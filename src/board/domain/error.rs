//! Error types for board domain validation.

use std::fmt;
use thiserror::Error;

/// Kind of record a validated name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    /// A project name.
    Project,
    /// A column name.
    Column,
    /// A task name.
    Task,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Project => "project",
            Self::Column => "column",
            Self::Task => "task",
        };
        f.write_str(label)
    }
}

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// A name is empty after trimming.
    #[error("{0} name must not be blank")]
    BlankName(NameKind),

    /// A name exceeds the maximum length.
    #[error("{kind} name is {actual} characters long, at most {max} are allowed")]
    NameTooLong {
        /// Record kind the name belongs to.
        kind: NameKind,
        /// Maximum permitted length in characters.
        max: usize,
        /// Length of the rejected name in characters.
        actual: usize,
    },

    /// The owner identity is empty after trimming.
    #[error("owner identity must not be blank")]
    BlankOwner,
}
