use todo_core::db::open_db;
use todo_core::{
    KvStore, KvTodoRepository, MemoryKvStore, SqliteKvStore, Todo, TodoRepository, TODOS_KEY,
};

fn sample() -> Vec<Todo> {
    vec![
        Todo::with_id("1", "Test 1", false).unwrap(),
        Todo::with_id("2", "Test 2", true).unwrap(),
        Todo::with_id("3", "Test 3", true).unwrap(),
    ]
}

#[test]
fn load_returns_none_when_key_is_unset() {
    let repo = KvTodoRepository::new(MemoryKvStore::new());
    assert_eq!(repo.load(), None);
}

#[test]
fn save_then_load_roundtrips_in_insertion_order() {
    let repo = KvTodoRepository::new(MemoryKvStore::new());
    let todos = sample();

    repo.save(&todos);
    assert_eq!(repo.load(), Some(todos));
}

#[test]
fn save_writes_plain_json_array_under_todos_key() {
    let repo = KvTodoRepository::new(MemoryKvStore::new());
    repo.save(&sample()[..1]);

    let raw = repo.store().get(TODOS_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{ "id": "1", "label": "Test 1", "checked": false }])
    );
}

#[test]
fn save_overwrites_previous_value() {
    let repo = KvTodoRepository::new(MemoryKvStore::new());
    repo.save(&sample());
    repo.save(&sample()[2..]);

    let loaded = repo.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].label, "Test 3");
}

#[test]
fn malformed_values_load_as_absent() {
    for raw in [
        "",
        "null",
        "{\"id\":\"1\"}",
        "[{\"id\":\"1\",\"label\":\"x\"}]",
        "[{\"id\":\"1\",\"label\":\"x\",\"checked\":1}]",
        r#"[{"id":"1","label":"x","checked":false},{"id":"1","label":"y","checked":false}]"#,
    ] {
        let repo = KvTodoRepository::new(MemoryKvStore::with_entry(TODOS_KEY, raw));
        assert_eq!(repo.load(), None, "payload should be rejected: {raw}");
    }
}

#[test]
fn loads_externally_written_value() {
    let raw = r#"[
        { "id": "1", "label": "Test 1", "checked": false },
        { "id": "2", "label": "Test 2", "checked": true },
        { "id": "3", "label": "Test 3", "checked": true }
    ]"#;
    let repo = KvTodoRepository::new(MemoryKvStore::with_entry(TODOS_KEY, raw));

    assert_eq!(repo.load(), Some(sample()));
}

#[test]
fn sqlite_backed_roundtrip_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        KvTodoRepository::new(SqliteKvStore::new(&conn)).save(&sample());
    }

    let conn = open_db(&path).unwrap();
    let repo = KvTodoRepository::new(SqliteKvStore::new(&conn));
    assert_eq!(repo.load(), Some(sample()));
}

#[test]
fn save_swallows_storage_failures() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    // No migrations ran, so `kv_entries` is missing and every call fails.
    let repo = KvTodoRepository::new(SqliteKvStore::new(&conn));

    repo.save(&sample());
    assert_eq!(repo.load(), None);
}
