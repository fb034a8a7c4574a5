use todo_core::{derived_order, Todo, TodoId, TodoList, TodoValidationError};

#[test]
fn todo_serialization_uses_expected_wire_fields() {
    let todo = Todo::with_id("42", "Water plants", true).unwrap();

    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "id": "42", "label": "Water plants", "checked": true })
    );

    let decoded: Todo = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, todo);
}

#[test]
fn deserialize_rejects_blank_label() {
    let value = serde_json::json!({ "id": "1", "label": "  ", "checked": false });

    let err = serde_json::from_value::<Todo>(value).unwrap_err();
    assert!(
        err.to_string().contains("label must not be empty"),
        "unexpected error: {err}"
    );
}

#[test]
fn with_id_rejects_blank_id() {
    let err = Todo::with_id(" ", "x", false).unwrap_err();
    assert_eq!(err, TodoValidationError::EmptyId);
}

#[test]
fn seed_list_matches_first_run_defaults() {
    let seed = TodoList::seed();
    let entries = seed.as_slice();

    assert_eq!(entries[0].label, "Buy groceries");
    assert!(!entries[0].checked);
    assert_eq!(entries[1].label, "Ace CoderPad interview");
    assert!(entries[1].checked);
    assert_ne!(entries[0].id, entries[1].id);
}

#[test]
fn derived_order_partitions_without_reordering_groups() {
    let list = TodoList::from_todos(vec![
        Todo::with_id("1", "one", true).unwrap(),
        Todo::with_id("2", "two", false).unwrap(),
        Todo::with_id("3", "three", true).unwrap(),
        Todo::with_id("4", "four", false).unwrap(),
        Todo::with_id("5", "five", false).unwrap(),
    ])
    .unwrap();

    let labels: Vec<&str> = list
        .derived_order()
        .iter()
        .map(|todo| todo.label.as_str())
        .collect();
    assert_eq!(labels, vec!["two", "four", "five", "one", "three"]);

    // Insertion order is untouched by deriving the view.
    assert_eq!(list.as_slice()[0].id, TodoId::from("1"));
}

#[test]
fn derived_order_applied_twice_is_stable() {
    let list = TodoList::from_todos(vec![
        Todo::with_id("a", "a", true).unwrap(),
        Todo::with_id("b", "b", false).unwrap(),
    ])
    .unwrap();

    let once: Vec<Todo> = list.derived_order().into_iter().cloned().collect();
    let twice: Vec<Todo> = derived_order(&once).into_iter().cloned().collect();
    assert_eq!(once, twice);
}
