//! Todo list controller.
//!
//! # Responsibility
//! - Own the session's todo list and apply `add`/`toggle` mutations.
//! - Persist the full insertion-ordered list after every applied mutation.
//! - Expose the derived display order for rendering.
//!
//! # Invariants
//! - Rejected input (blank label, unknown id) changes nothing and writes
//!   nothing.
//! - No operation on the controller returns an error or panics.
//! - The repository only ever sees immutable snapshots.

use crate::model::list::TodoList;
use crate::model::todo::{Todo, TodoId};
use crate::repo::todo_repo::TodoRepository;
use log::{debug, info};

/// User-initiated mutation routed through [`TodoListController::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoCommand {
    /// Submit a new item with the raw (untrimmed) input text.
    Add { label: String },
    /// Flip completion of the item with this id.
    Toggle { id: TodoId },
}

/// Whether a dispatched command changed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Ignored,
}

/// Session-scoped owner of the todo list.
pub struct TodoListController<R: TodoRepository> {
    repo: R,
    list: TodoList,
}

impl<R: TodoRepository> TodoListController<R> {
    /// Loads the stored list, or seeds and persists the default list when
    /// storage holds nothing usable.
    pub fn initialize(repo: R) -> Self {
        // Entries breaking list invariants count as absent, same as bad JSON.
        let loaded = repo
            .load()
            .and_then(|todos| TodoList::from_todos(todos).ok());

        let list = match loaded {
            Some(list) => {
                info!(
                    "event=todos_init module=service status=loaded count={}",
                    list.len()
                );
                list
            }
            None => {
                let seed = TodoList::seed();
                repo.save(seed.as_slice());
                info!(
                    "event=todos_init module=service status=seeded count={}",
                    seed.len()
                );
                seed
            }
        };

        Self { repo, list }
    }

    /// Appends a new unchecked item labelled with the trimmed input.
    ///
    /// Blank input is ignored without touching storage.
    pub fn add(&mut self, label: &str) -> &TodoList {
        self.try_add(label);
        &self.list
    }

    /// Flips completion of the item with `id` in place.
    ///
    /// Unknown ids are ignored without touching storage.
    pub fn toggle(&mut self, id: &TodoId) -> &TodoList {
        self.try_toggle(id);
        &self.list
    }

    /// Single mutation entry point for UI events.
    pub fn dispatch(&mut self, command: TodoCommand) -> CommandOutcome {
        let applied = match command {
            TodoCommand::Add { label } => self.try_add(&label),
            TodoCommand::Toggle { id } => self.try_toggle(&id),
        };
        if applied {
            CommandOutcome::Applied
        } else {
            CommandOutcome::Ignored
        }
    }

    /// Items in render order: open items first, completed items last.
    pub fn derived_order(&self) -> Vec<&Todo> {
        self.list.derived_order()
    }

    /// Items in insertion order, as persisted.
    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    fn try_add(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() {
            return false;
        }

        let todo = Todo {
            id: self.fresh_id(),
            label: label.to_string(),
            checked: false,
        };
        if self.list.push(todo).is_err() {
            return false;
        }
        self.persist("add");
        true
    }

    fn try_toggle(&mut self, id: &TodoId) -> bool {
        if !self.list.toggle(id) {
            return false;
        }
        self.persist("toggle");
        true
    }

    fn fresh_id(&self) -> TodoId {
        loop {
            let id = TodoId::generate();
            if !self.list.contains(&id) {
                return id;
            }
        }
    }

    fn persist(&self, op: &'static str) {
        self.repo.save(self.list.as_slice());
        debug!(
            "event=todos_mutate module=service status=ok op={} count={} checked={}",
            op,
            self.list.len(),
            self.list.checked_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandOutcome, TodoCommand, TodoListController};
    use crate::model::todo::{Todo, TodoId};
    use crate::repo::todo_repo::TodoRepository;
    use std::cell::{Cell, RefCell};

    /// Repository double that counts writes.
    #[derive(Default)]
    struct RecordingRepo {
        stored: RefCell<Option<Vec<Todo>>>,
        saves: Cell<usize>,
    }

    impl TodoRepository for RecordingRepo {
        fn load(&self) -> Option<Vec<Todo>> {
            self.stored.borrow().clone()
        }

        fn save(&self, todos: &[Todo]) {
            self.saves.set(self.saves.get() + 1);
            *self.stored.borrow_mut() = Some(todos.to_vec());
        }
    }

    #[test]
    fn dispatch_reports_applied_and_ignored() {
        let mut controller = TodoListController::initialize(RecordingRepo::default());
        let saves_after_init = controller.repository().saves.get();

        let outcome = controller.dispatch(TodoCommand::Add {
            label: "  stretch ".to_string(),
        });
        assert_eq!(outcome, CommandOutcome::Applied);
        assert_eq!(controller.list().as_slice()[2].label, "stretch");

        let outcome = controller.dispatch(TodoCommand::Add {
            label: "\t ".to_string(),
        });
        assert_eq!(outcome, CommandOutcome::Ignored);

        let outcome = controller.dispatch(TodoCommand::Toggle {
            id: TodoId::from("nope"),
        });
        assert_eq!(outcome, CommandOutcome::Ignored);

        assert_eq!(controller.repository().saves.get(), saves_after_init + 1);
    }

    #[test]
    fn persisted_snapshot_is_insertion_order() {
        let mut controller = TodoListController::initialize(RecordingRepo::default());
        let first = controller.list().as_slice()[0].id.clone();
        controller.toggle(&first);

        let stored = controller.repository().stored.borrow().clone().unwrap();
        assert_eq!(stored[0].id, first);
        assert!(stored[0].checked);
    }
}
