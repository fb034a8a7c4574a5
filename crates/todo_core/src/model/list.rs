//! Insertion-ordered todo list and its derived display order.
//!
//! # Responsibility
//! - Hold entries in creation order, unique by id.
//! - Derive the render order: unchecked first, then checked.
//!
//! # Invariants
//! - No two entries share an `id`.
//! - Mutations never reorder the underlying sequence.
//! - Display order is computed on demand and never stored.

use crate::model::todo::{Todo, TodoId, TodoValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed id of the unchecked seed entry.
pub const SEED_GROCERIES_ID: &str = "seed-1";
/// Fixed id of the checked seed entry.
pub const SEED_INTERVIEW_ID: &str = "seed-2";

/// Error raised when building a list from untrusted entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoListError {
    Invalid(TodoValidationError),
    DuplicateId(TodoId),
}

impl Display for TodoListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate todo id: {id}"),
        }
    }
}

impl Error for TodoListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<TodoValidationError> for TodoListError {
    fn from(value: TodoValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// Ordered collection of todos in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    /// Builds a list from entries, keeping their order.
    ///
    /// # Errors
    /// - `Invalid` when an entry fails `Todo::validate`.
    /// - `DuplicateId` when two entries share an id.
    pub fn from_todos(todos: Vec<Todo>) -> Result<Self, TodoListError> {
        for (index, todo) in todos.iter().enumerate() {
            todo.validate()?;
            if todos[..index].iter().any(|earlier| earlier.id == todo.id) {
                return Err(TodoListError::DuplicateId(todo.id.clone()));
            }
        }
        Ok(Self { todos })
    }

    /// Default list used when storage holds no prior state.
    pub fn seed() -> Self {
        Self {
            todos: vec![
                Todo {
                    id: TodoId::from(SEED_GROCERIES_ID),
                    label: "Buy groceries".to_string(),
                    checked: false,
                },
                Todo {
                    id: TodoId::from(SEED_INTERVIEW_ID),
                    label: "Ace CoderPad interview".to_string(),
                    checked: true,
                },
            ],
        }
    }

    /// Appends an entry at the end of the insertion order.
    ///
    /// # Errors
    /// - `DuplicateId` when the id is already present; the list is unchanged.
    pub fn push(&mut self, todo: Todo) -> Result<(), TodoListError> {
        todo.validate()?;
        if self.contains(&todo.id) {
            return Err(TodoListError::DuplicateId(todo.id));
        }
        self.todos.push(todo);
        Ok(())
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| &todo.id == id)
    }

    pub fn contains(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Flips `checked` on the matching entry in place.
    ///
    /// Returns `false` when no entry has this id.
    pub fn toggle(&mut self, id: &TodoId) -> bool {
        match self.todos.iter_mut().find(|todo| &todo.id == id) {
            Some(todo) => {
                todo.toggle();
                true
            }
            None => false,
        }
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.todos
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn checked_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.checked).count()
    }

    pub fn unchecked_count(&self) -> usize {
        self.len() - self.checked_count()
    }

    /// Render order for this list. See [`derived_order`].
    pub fn derived_order(&self) -> Vec<&Todo> {
        derived_order(&self.todos)
    }

    pub fn into_vec(self) -> Vec<Todo> {
        self.todos
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Stable partition of `todos`: unchecked entries, then checked entries.
///
/// Relative order inside each group is the input order, so applying this
/// twice yields the same sequence.
pub fn derived_order(todos: &[Todo]) -> Vec<&Todo> {
    let (unchecked, checked): (Vec<&Todo>, Vec<&Todo>) =
        todos.iter().partition(|todo| !todo.checked);
    unchecked.into_iter().chain(checked).collect()
}
