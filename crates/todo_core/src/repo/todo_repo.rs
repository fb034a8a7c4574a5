//! Todo persistence adapter over a key-value slot.
//!
//! # Responsibility
//! - Translate between in-memory todo sequences and the JSON value stored
//!   under `TODOS_KEY`.
//! - Absorb every storage failure so callers see only "loaded" or "absent".
//!
//! # Invariants
//! - The stored value is a JSON array of `{id, label, checked}` in insertion
//!   order.
//! - Missing, unreadable and malformed values all load as `None`.
//! - `save` never reports failure to the caller.

use crate::model::list::TodoList;
use crate::model::todo::Todo;
use crate::store::KvStore;
use log::{debug, warn};

/// Fixed storage key for the todo list.
pub const TODOS_KEY: &str = "todos";

/// Load/save contract consumed by the list controller.
pub trait TodoRepository {
    /// Returns the stored todos, or `None` when nothing usable is stored.
    fn load(&self) -> Option<Vec<Todo>>;
    /// Overwrites the stored todos with `todos`, in the given order.
    fn save(&self, todos: &[Todo]);
}

impl<R: TodoRepository + ?Sized> TodoRepository for &R {
    fn load(&self) -> Option<Vec<Todo>> {
        (**self).load()
    }

    fn save(&self, todos: &[Todo]) {
        (**self).save(todos)
    }
}

/// JSON-over-key-value implementation of `TodoRepository`.
pub struct KvTodoRepository<S: KvStore> {
    store: S,
}

impl<S: KvStore> KvTodoRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KvStore> TodoRepository for KvTodoRepository<S> {
    fn load(&self) -> Option<Vec<Todo>> {
        let raw = match self.store.get(TODOS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=todos_load module=repo status=absent");
                return None;
            }
            Err(err) => {
                warn!(
                    "event=todos_load module=repo status=error error_code=store_read_failed error={}",
                    err
                );
                return None;
            }
        };

        match decode_todos(&raw) {
            Some(todos) => {
                debug!(
                    "event=todos_load module=repo status=ok count={}",
                    todos.len()
                );
                Some(todos)
            }
            None => {
                warn!(
                    "event=todos_load module=repo status=malformed bytes={}",
                    raw.len()
                );
                None
            }
        }
    }

    fn save(&self, todos: &[Todo]) {
        let encoded = match serde_json::to_string(todos) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(
                    "event=todos_save module=repo status=error error_code=encode_failed error={}",
                    err
                );
                return;
            }
        };

        match self.store.put(TODOS_KEY, &encoded) {
            Ok(()) => debug!(
                "event=todos_save module=repo status=ok count={}",
                todos.len()
            ),
            Err(err) => warn!(
                "event=todos_save module=repo status=error error_code=store_write_failed error={}",
                err
            ),
        }
    }
}

/// Parses a stored value; `None` for anything that is not a valid todo list.
fn decode_todos(raw: &str) -> Option<Vec<Todo>> {
    let todos: Vec<Todo> = serde_json::from_str(raw).ok()?;
    TodoList::from_todos(todos).ok().map(TodoList::into_vec)
}

#[cfg(test)]
mod tests {
    use super::decode_todos;

    #[test]
    fn decode_accepts_expected_shape_and_ignores_extra_fields() {
        let todos = decode_todos(r#"[{"checked":true,"label":"a","id":"1","extra":0}]"#)
            .expect("valid payload should decode");
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id.as_str(), "1");
        assert!(todos[0].checked);
    }

    #[test]
    fn decode_rejects_malformed_payloads() {
        assert!(decode_todos("not json").is_none());
        assert!(decode_todos("{}").is_none());
        assert!(decode_todos(r#"[{"id":"1","label":"a"}]"#).is_none());
        assert!(decode_todos(r#"[{"id":1,"label":"a","checked":false}]"#).is_none());
        assert!(decode_todos(r#"[{"id":"1","label":"a","checked":"no"}]"#).is_none());
        assert!(decode_todos(r#"[{"id":"1","label":"","checked":false}]"#).is_none());
        assert!(decode_todos(
            r#"[{"id":"1","label":"a","checked":false},{"id":"1","label":"b","checked":true}]"#
        )
        .is_none());
    }

    #[test]
    fn decode_accepts_empty_array() {
        assert_eq!(decode_todos("[]"), Some(Vec::new()));
    }
}
