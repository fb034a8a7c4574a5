//! SQLite bootstrap for the durable key-value medium.
//!
//! # Responsibility
//! - Open and configure SQLite connections backing `SqliteKvStore`.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - No key-value access happens before migrations succeed.
//!
//! Failures surface as `StoreError`, the same type `KvStore` reports.

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};
