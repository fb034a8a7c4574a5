//! Todo domain model.
//!
//! # Responsibility
//! - Define the single list entry persisted under the `todos` key.
//! - Validate entries at construction and deserialization boundaries.
//!
//! # Invariants
//! - `id` is non-empty, assigned once and never reused.
//! - `label` is non-empty after trimming and immutable after creation.
//! - `checked` only changes through `Todo::toggle`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque stable identifier for a todo entry.
///
/// Serialized as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing identifier without validation.
    ///
    /// Validation happens when the id is attached to a `Todo`.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TodoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TodoId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Validation failure for a single todo entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoValidationError {
    /// `id` is empty or whitespace only.
    EmptyId,
    /// `label` is empty or whitespace only.
    EmptyLabel,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "todo id must not be empty"),
            Self::EmptyLabel => write!(f, "todo label must not be empty"),
        }
    }
}

impl Error for TodoValidationError {}

/// One entry of the todo list.
///
/// Wire shape is exactly `{ "id": string, "label": string, "checked": bool }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TodoRecord")]
pub struct Todo {
    pub id: TodoId,
    pub label: String,
    pub checked: bool,
}

/// Unvalidated wire record; converted into `Todo` through `TryFrom`.
#[derive(Deserialize)]
struct TodoRecord {
    id: TodoId,
    label: String,
    checked: bool,
}

impl TryFrom<TodoRecord> for Todo {
    type Error = TodoValidationError;

    fn try_from(record: TodoRecord) -> Result<Self, Self::Error> {
        Self::with_id(record.id, record.label, record.checked)
    }
}

impl Todo {
    /// Creates an unchecked todo with a freshly generated id.
    ///
    /// The label is stored as given; callers trim user input first.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: TodoId::generate(),
            label: label.into(),
            checked: false,
        }
    }

    /// Creates a todo with a caller-provided id.
    ///
    /// Used for seed data and for entries read back from storage.
    ///
    /// # Errors
    /// - `EmptyId` when `id` is blank.
    /// - `EmptyLabel` when `label` is blank.
    pub fn with_id(
        id: impl Into<TodoId>,
        label: impl Into<String>,
        checked: bool,
    ) -> Result<Self, TodoValidationError> {
        let todo = Self {
            id: id.into(),
            label: label.into(),
            checked,
        };
        todo.validate()?;
        Ok(todo)
    }

    /// Checks entry invariants.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(TodoValidationError::EmptyId);
        }
        if self.label.trim().is_empty() {
            return Err(TodoValidationError::EmptyLabel);
        }
        Ok(())
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

#[cfg(test)]
mod tests {
    use super::{Todo, TodoId, TodoValidationError};

    #[test]
    fn new_todo_is_unchecked_with_fresh_id() {
        let first = Todo::new("milk");
        let second = Todo::new("milk");

        assert!(!first.checked);
        assert_eq!(first.label, "milk");
        assert!(!first.id.as_str().is_empty());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn with_id_rejects_blank_fields() {
        assert_eq!(
            Todo::with_id("", "label", false).unwrap_err(),
            TodoValidationError::EmptyId
        );
        assert_eq!(
            Todo::with_id("1", "   ", false).unwrap_err(),
            TodoValidationError::EmptyLabel
        );
    }

    #[test]
    fn toggle_flips_checked_only() {
        let mut todo = Todo::with_id("7", "walk", false).unwrap();
        todo.toggle();
        assert!(todo.checked);
        assert_eq!(todo.id, TodoId::from("7"));
        assert_eq!(todo.label, "walk");
        todo.toggle();
        assert!(!todo.checked);
    }
}
