//! Runtime configuration for board services and the `PostgreSQL` pool.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Top-level board configuration.
///
/// Missing fields fall back to their defaults when loaded from JSON.
///
/// # Examples
///
/// ```
/// use taskboard::board::config::BoardConfig;
///
/// let config = BoardConfig::from_json(r#"{ "limits": { "max_columns_per_project": 8 } }"#)
///     .expect("valid configuration");
/// assert_eq!(config.limits.max_columns_per_project, 8);
/// assert_eq!(config.pool.max_size, 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Capacity limits enforced by the services.
    pub limits: BoardLimits,
    /// Connection pool settings for the `PostgreSQL` adapter.
    pub pool: PoolSettings,
}

/// Capacity limits applied when creating and updating records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardLimits {
    /// Maximum number of columns in one project.
    pub max_columns_per_project: usize,
    /// Maximum number of tasks in one column.
    pub max_tasks_per_column: usize,
    /// Maximum task description length in characters.
    pub max_description_length: usize,
}

impl Default for BoardLimits {
    fn default() -> Self {
        Self {
            max_columns_per_project: 64,
            max_tasks_per_column: 1_000,
            max_description_length: 10_000,
        }
    }
}

/// Connection pool settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoolSettings {
    /// Maximum number of pooled connections.
    pub max_size: u32,
    /// Seconds to wait for a free connection.
    pub connection_timeout_secs: u64,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_size: 10,
            connection_timeout_secs: 30,
        }
    }
}

impl PoolSettings {
    /// Returns the connection timeout as a [`Duration`].
    #[must_use]
    pub const fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_secs)
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid board configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A limit that must be positive is zero.
    #[error("configuration value '{0}' must be greater than zero")]
    ZeroLimit(&'static str),
}

impl BoardConfig {
    /// Creates a configuration with reduced limits.
    ///
    /// Useful for tests exercising capacity checks.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            limits: BoardLimits {
                max_columns_per_project: 8,
                max_tasks_per_column: 32,
                max_description_length: 512,
            },
            pool: PoolSettings {
                max_size: 2,
                connection_timeout_secs: 5,
            },
        }
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields,
    /// and [`ConfigError::ZeroLimit`] when a limit is zero.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every limit is positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroLimit`] naming the first zero limit.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_columns_per_project == 0 {
            return Err(ConfigError::ZeroLimit("limits.max_columns_per_project"));
        }
        if self.limits.max_tasks_per_column == 0 {
            return Err(ConfigError::ZeroLimit("limits.max_tasks_per_column"));
        }
        if self.pool.max_size == 0 {
            return Err(ConfigError::ZeroLimit("pool.max_size"));
        }
        Ok(())
    }
}
