//! Scenarios exercising the task store: additions, completions by id and by
//! label, and the corner cases around missing or ambiguous lookups.

use chrono::NaiveDate;

use corkboard::{AddTaskError, TaskStore};

fn date(text: &str) -> NaiveDate {
    corkboard::date::parse_due_date(text).unwrap()
}

#[test]
fn adding_a_task_appends_it_to_the_active_list() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = TaskStore::new();
    assert!(store.active().is_empty());

    let label = store
        .add_task("Buy milk", date("2024-01-01"))
        .unwrap()
        .label();
    assert_eq!(label, "Buy milk (Due: 2024-01-01)");
    assert_eq!(store.active().len(), 1);
    assert!(store.completed().is_empty());

    store.add_task("Pay rent", date("2024-03-05")).unwrap();
    assert_eq!(store.active().len(), 2);
    // Insertion order is display order
    assert_eq!(store.active()[0].description(), "Buy milk");
    assert_eq!(store.active()[1].description(), "Pay rent");
}

#[test]
fn empty_descriptions_are_rejected() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = TaskStore::new();
    assert_eq!(
        store.add_task("", date("2024-01-01")).unwrap_err(),
        AddTaskError::EmptyDescription,
    );
    assert_eq!(
        store.add_task("   \t ", date("2024-01-01")).unwrap_err(),
        AddTaskError::EmptyDescription,
    );
    assert!(store.active().is_empty());
    assert!(store.completed().is_empty());
}

#[test]
fn completing_by_id_moves_the_task_to_the_completed_list() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = TaskStore::new();
    let id = store
        .add_task("Pay rent", date("2024-03-05"))
        .unwrap()
        .id()
        .clone();

    assert!(store.complete_task(&id));
    assert!(store.active().is_empty());
    assert_eq!(store.completed(), ["Pay rent (Due: 2024-03-05)"]);

    // The id is gone from the active list: completing again is a no-op
    assert!(!store.complete_task(&id));
    assert!(store.active().is_empty());
    assert_eq!(store.completed().len(), 1);
}

#[test]
fn completing_by_label_preserves_the_order_of_the_others() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = TaskStore::new();
    store.add_task("Buy milk", date("2024-01-01")).unwrap();
    store.add_task("Pay rent", date("2024-03-05")).unwrap();
    store.add_task("Call the plumber", date("2024-03-06")).unwrap();

    assert!(store.complete_task_by_label("Pay rent (Due: 2024-03-05)"));

    let remaining: Vec<&str> = store.active().iter().map(|t| t.description()).collect();
    assert_eq!(remaining, ["Buy milk", "Call the plumber"]);
    assert_eq!(store.completed(), ["Pay rent (Due: 2024-03-05)"]);
}

#[test]
fn completing_an_unknown_label_changes_nothing() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = TaskStore::new();
    store.add_task("Buy milk", date("2024-01-01")).unwrap();

    // Right description, wrong date: the rendered label must match exactly
    assert!(!store.complete_task_by_label("Buy milk (Due: 2024-01-02)"));
    assert!(!store.complete_task_by_label("Buy milk"));

    assert_eq!(store.active().len(), 1);
    assert!(store.completed().is_empty());
}

#[test]
fn duplicate_labels_complete_the_first_match_only() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = TaskStore::new();
    let first = store
        .add_task("Buy milk", date("2024-01-01"))
        .unwrap()
        .id()
        .clone();
    let second = store
        .add_task("Buy milk", date("2024-01-01"))
        .unwrap()
        .id()
        .clone();

    assert!(store.complete_task_by_label("Buy milk (Due: 2024-01-01)"));

    // In insertion order, only the first one went away
    assert_eq!(store.active().len(), 1);
    assert_eq!(store.active()[0].id(), &second);
    assert!(!store.complete_task(&first));
    assert_eq!(store.completed(), ["Buy milk (Due: 2024-01-01)"]);
}

#[test]
fn duplicate_labels_are_unambiguous_by_id() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = TaskStore::new();
    let first = store
        .add_task("Buy milk", date("2024-01-01"))
        .unwrap()
        .id()
        .clone();
    let second = store
        .add_task("Buy milk", date("2024-01-01"))
        .unwrap()
        .id()
        .clone();

    // Completing by id can target the second duplicate, which the label
    // lookup never could
    assert!(store.complete_task(&second));
    assert_eq!(store.active().len(), 1);
    assert_eq!(store.active()[0].id(), &first);
}
