//! Validated names and identities.

use super::{BoardDomainError, NameKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of any record name, in characters.
pub const MAX_NAME_LENGTH: usize = 255;

fn validate(kind: NameKind, value: &str) -> Result<String, BoardDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BoardDomainError::BlankName(kind));
    }
    let actual = trimmed.chars().count();
    if actual > MAX_NAME_LENGTH {
        return Err(BoardDomainError::NameTooLong {
            kind,
            max: MAX_NAME_LENGTH,
            actual,
        });
    }
    Ok(trimmed.to_owned())
}

/// Verified identity of the caller that owns a project.
///
/// The identity is opaque and only ever compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerName(String);

impl OwnerName {
    /// Creates an owner identity from a non-blank string.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::BlankOwner`] when the value is blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, BoardDomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::BlankOwner);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Project name, unique per owner by exact match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Creates a trimmed, non-blank project name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError`] when the name is blank or too long.
    pub fn new(value: impl AsRef<str>) -> Result<Self, BoardDomainError> {
        validate(NameKind::Project, value.as_ref()).map(Self)
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the name starts with `prefix`, ignoring case.
    #[must_use]
    pub fn starts_with_ignoring_case(&self, prefix: &str) -> bool {
        self.0.to_lowercase().starts_with(&prefix.to_lowercase())
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Column name, unique per project ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnName(String);

impl ColumnName {
    /// Creates a trimmed, non-blank column name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError`] when the name is blank or too long.
    pub fn new(value: impl AsRef<str>) -> Result<Self, BoardDomainError> {
        validate(NameKind::Column, value.as_ref()).map(Self)
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when both names are equal ignoring case.
    #[must_use]
    pub fn collides_with(&self, other: &Self) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task name. Task names need not be unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskName(String);

impl TaskName {
    /// Creates a trimmed, non-blank task name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError`] when the name is blank or too long.
    pub fn new(value: impl AsRef<str>) -> Result<Self, BoardDomainError> {
        validate(NameKind::Task, value.as_ref()).map(Self)
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
