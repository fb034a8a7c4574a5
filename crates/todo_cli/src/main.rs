//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `todo_core` linkage without any presentation layer.
//! - Print the seeded list in render order on a throwaway in-memory store.
//! - Write core logs under the system temp directory.

use todo_core::{
    open_connection, CoreConfig, KvTodoRepository, SqliteKvStore, TodoListController,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("todo_core ping={}", todo_core::ping());
    println!("todo_core version={}", todo_core::core_version());

    let config = CoreConfig {
        log_dir: Some(std::env::temp_dir().join("todo_cli-logs")),
        ..CoreConfig::default()
    };
    config.validate()?;
    config.init_logging()?;
    let conn = open_connection(&config.storage)?;
    let controller =
        TodoListController::initialize(KvTodoRepository::new(SqliteKvStore::new(&conn)));

    for todo in controller.derived_order() {
        let mark = if todo.checked { 'x' } else { ' ' };
        println!("[{mark}] {} ({})", todo.label, todo.id);
    }
    Ok(())
}
