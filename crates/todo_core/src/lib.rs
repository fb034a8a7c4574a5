//! Core state management for the todo list.
//! Owns the load -> derive order -> mutate -> persist cycle.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::{open_connection, ConfigError, CoreConfig, StorageConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::list::{derived_order, TodoList, TodoListError};
pub use model::todo::{Todo, TodoId, TodoValidationError};
pub use repo::todo_repo::{KvTodoRepository, TodoRepository, TODOS_KEY};
pub use service::todo_service::{CommandOutcome, TodoCommand, TodoListController};
pub use store::{KvStore, MemoryKvStore, SqliteKvStore, StoreError, StoreResult};

/// Minimal health-check API for embedding layers.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
