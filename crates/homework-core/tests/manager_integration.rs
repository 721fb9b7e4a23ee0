//! Integration tests for the assignment manager over the JSON file store.

use chrono::{Duration, NaiveDateTime};
use homework_core::advisor::{get_workload_warnings_at, local_now, plan_schedule};
use homework_core::{
    AssignmentManager, AssignmentStore, AssignmentUpdate, CoreError, JsonFileStore, NewAssignment,
    Priority,
};

fn new_assignment(name: &str, due: NaiveDateTime, priority: Priority, difficulty: i64) -> NewAssignment {
    NewAssignment {
        name: name.into(),
        class: "Programming".into(),
        due_date: Some(due),
        priority: Some(priority),
        difficulty: Some(difficulty),
        completed: false,
    }
}

#[test]
fn full_assignment_lifecycle_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assignments.json");
    let now = local_now();

    {
        let store = JsonFileStore::open(&path).unwrap();
        let mut manager = AssignmentManager::open(store).unwrap();
        let a = manager
            .add(new_assignment("Parser", now + Duration::days(3), Priority::High, 8))
            .unwrap();
        let b = manager
            .add(new_assignment("Linked list", now + Duration::days(6), Priority::Low, 3))
            .unwrap();
        manager.set_completed(b, true).unwrap();
        manager
            .update(
                a,
                AssignmentUpdate {
                    name: Some("Recursive descent parser".into()),
                    ..Default::default()
                },
            )
            .unwrap();
    }

    let store = JsonFileStore::open(&path).unwrap();
    let manager = AssignmentManager::open(store).unwrap();
    assert_eq!(manager.assignments().len(), 2);
    assert_eq!(manager.get(1).unwrap().name, "Recursive descent parser");
    assert!(manager.get(2).unwrap().completed);

    let entries = plan_schedule(manager.assignments(), now);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, 1);
}

#[test]
fn deleted_ids_are_not_reused() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("assignments.json")).unwrap();
    let mut manager = AssignmentManager::open(store).unwrap();
    let due = local_now() + Duration::days(2);

    manager.add(new_assignment("One", due, Priority::Medium, 2)).unwrap();
    let two = manager.add(new_assignment("Two", due, Priority::Medium, 2)).unwrap();
    manager.delete(two).unwrap();
    assert_eq!(manager.add(new_assignment("Three", due, Priority::Medium, 2)).unwrap(), 3);

    assert!(matches!(manager.delete(two), Err(CoreError::NotFound { id: 2 })));
}

#[test]
fn warnings_reflect_managed_assignments() {
    let store = homework_core::MemoryStore::new();
    let mut manager = AssignmentManager::open(&store).unwrap();
    let now = local_now();

    for name in ["A", "B", "C"] {
        manager
            .add(new_assignment(name, now + Duration::days(1), Priority::High, 5))
            .unwrap();
    }

    let warnings = get_workload_warnings_at(manager.assignments(), now);
    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].contains("3 high-priority"));
    assert!(warnings[1].contains("22.5"));
    assert_eq!(store.load().unwrap().len(), 3);
}
