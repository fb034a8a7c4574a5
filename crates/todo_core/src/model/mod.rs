//! Domain model for the todo list.
//!
//! # Responsibility
//! - Define the canonical `Todo` entry and the insertion-ordered `TodoList`.
//! - Derive the display order as a pure function over the list.
//!
//! # Invariants
//! - Every entry is identified by a stable `TodoId`.
//! - Persisted order is insertion order; display order is never stored.

pub mod list;
pub mod todo;
