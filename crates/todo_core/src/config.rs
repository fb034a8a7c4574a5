//! Core runtime configuration.
//!
//! # Responsibility
//! - Describe where the todo slot lives and how logging is set up.
//! - Open the configured storage medium.
//!
//! # Invariants
//! - Configuration is passed explicitly; nothing is read from the environment.
//! - `File` storage paths are non-empty.

use crate::db::{open_db, open_db_in_memory};
use crate::logging::{default_log_level, init_logging, normalize_level, LoggingError};
use crate::store::StoreError;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Default database file name for file-backed storage.
pub const DEFAULT_DB_FILE_NAME: &str = "todos.sqlite3";

/// Backing medium for the todo key-value slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StorageConfig {
    /// Private in-memory SQLite database; lost on drop.
    #[default]
    InMemory,
    /// SQLite database file at the given path.
    File(PathBuf),
}

/// Top-level configuration for embedding the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub storage: StorageConfig,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling logs; `None` leaves logging unconfigured.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyDbPath,
    Logging(LoggingError),
    Store(StoreError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDbPath => write!(f, "storage file path must not be empty"),
            Self::Logging(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyDbPath => None,
            Self::Logging(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<LoggingError> for ConfigError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<StoreError> for ConfigError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl StorageConfig {
    /// File storage at `DEFAULT_DB_FILE_NAME` inside `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::File(dir.into().join(DEFAULT_DB_FILE_NAME))
    }
}

impl CoreConfig {
    /// Checks fields without touching the file system.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let StorageConfig::File(path) = &self.storage {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::EmptyDbPath);
            }
        }
        normalize_level(&self.log_level)?;
        Ok(())
    }

    /// Starts logging when `log_dir` is set. Idempotent for the same config.
    pub fn init_logging(&self) -> Result<(), ConfigError> {
        match &self.log_dir {
            Some(dir) => Ok(init_logging(&self.log_level, dir)?),
            None => Ok(()),
        }
    }
}

/// Opens a migrated connection for the configured storage medium.
pub fn open_connection(storage: &StorageConfig) -> Result<Connection, ConfigError> {
    let conn = match storage {
        StorageConfig::InMemory => open_db_in_memory()?,
        StorageConfig::File(path) if path.as_os_str().is_empty() => {
            return Err(ConfigError::EmptyDbPath);
        }
        StorageConfig::File(path) => open_db(path)?,
    };
    Ok(conn)
}
