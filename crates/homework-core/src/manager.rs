//! Assignment CRUD over an [`AssignmentStore`].
//!
//! Every mutation is saved immediately. If the save fails the in-memory list
//! is rolled back so memory and disk never diverge.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::advisor::local_now;
use crate::advisor::workload::UNCATEGORIZED;
use crate::assignment::{parse_due_date, Assignment, Priority};
use crate::error::{CoreError, Result, ValidationError};
use crate::storage::AssignmentStore;

/// Categories offered when creating an assignment.
pub const ASSIGNMENT_CATEGORIES: [&str; 8] = [
    "Exam",
    "Quiz",
    "Homework",
    "Project",
    "Paper",
    "Lab",
    "Presentation",
    "Other",
];

const MIN_DIFFICULTY: i64 = 1;
const MAX_DIFFICULTY: i64 = 10;

/// Input for [`AssignmentManager::add`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewAssignment {
    pub name: String,
    pub class: String,
    pub due_date: Option<NaiveDateTime>,
    pub priority: Option<Priority>,
    pub difficulty: Option<i64>,
    #[serde(default)]
    pub completed: bool,
}

/// Patch for [`AssignmentManager::update`]; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentUpdate {
    pub name: Option<String>,
    pub class: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub priority: Option<Priority>,
    pub difficulty: Option<i64>,
    pub completed: Option<bool>,
}

impl AssignmentUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.class.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
            && self.difficulty.is_none()
            && self.completed.is_none()
    }
}

/// Outcome of [`AssignmentManager::set_completed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionChange {
    Updated,
    /// The assignment already had the requested status; nothing was saved.
    AlreadySet,
}

/// Parse due-date text in one of the stored formats.
pub fn parse_due_date_text(text: &str) -> std::result::Result<NaiveDateTime, ValidationError> {
    parse_due_date(text.trim()).ok_or_else(|| ValidationError::InvalidDate {
        value: text.to_string(),
    })
}

fn validate_difficulty(value: i64) -> std::result::Result<i64, ValidationError> {
    if (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::DifficultyOutOfRange(value))
    }
}

/// Owns the session's assignment list and its id counter.
pub struct AssignmentManager<S: AssignmentStore> {
    store: S,
    assignments: Vec<Assignment>,
    last_id: u64,
}

impl<S: AssignmentStore> AssignmentManager<S> {
    /// Load all assignments from `store`.
    pub fn open(store: S) -> Result<Self> {
        let assignments = store.load()?;
        let last_id = assignments.iter().map(|a| a.id).max().unwrap_or(0);
        Ok(Self {
            store,
            assignments,
            last_id,
        })
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn get(&self, id: u64) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    fn position(&self, id: u64) -> Result<usize> {
        self.assignments
            .iter()
            .position(|a| a.id == id)
            .ok_or(CoreError::NotFound { id })
    }

    /// Validate and store a new assignment, returning its id.
    pub fn add(&mut self, new: NewAssignment) -> Result<u64> {
        let name = Some(new.name).filter(|s| !s.trim().is_empty());
        let name = name.ok_or(ValidationError::MissingField("name"))?;
        let class = Some(new.class).filter(|s| !s.trim().is_empty());
        let class = class.ok_or(ValidationError::MissingField("class"))?;
        let due_date = new.due_date.ok_or(ValidationError::MissingField("due_date"))?;
        let priority = new
            .priority
            .filter(|p| !p.as_str().is_empty())
            .ok_or(ValidationError::MissingField("priority"))?;
        let difficulty = new
            .difficulty
            .ok_or(ValidationError::MissingField("difficulty"))?;
        let difficulty = validate_difficulty(difficulty)?;

        self.last_id += 1;
        let id = self.last_id;
        self.assignments.push(Assignment {
            id,
            name,
            class: Some(class),
            due_date: Some(due_date),
            priority: Some(priority),
            difficulty: Some(difficulty),
            completed: new.completed,
            date_added: Some(local_now()),
        });

        if let Err(e) = self.store.save(&self.assignments) {
            self.assignments.pop();
            self.last_id -= 1;
            return Err(e);
        }
        tracing::info!(id, "added assignment");
        Ok(id)
    }

    /// Apply `update` to the assignment with `id`. The id itself never changes.
    pub fn update(&mut self, id: u64, update: AssignmentUpdate) -> Result<()> {
        let index = self.position(id)?;
        if let Some(difficulty) = update.difficulty {
            validate_difficulty(difficulty)?;
        }

        let original = self.assignments[index].clone();
        let target = &mut self.assignments[index];
        if let Some(name) = update.name {
            target.name = name;
        }
        if let Some(class) = update.class {
            target.class = Some(class);
        }
        if let Some(due_date) = update.due_date {
            target.due_date = Some(due_date);
        }
        if let Some(priority) = update.priority {
            target.priority = Some(priority);
        }
        if let Some(difficulty) = update.difficulty {
            target.difficulty = Some(difficulty);
        }
        if let Some(completed) = update.completed {
            target.completed = completed;
        }

        if let Err(e) = self.store.save(&self.assignments) {
            self.assignments[index] = original;
            return Err(e);
        }
        tracing::info!(id, "updated assignment");
        Ok(())
    }

    /// Remove the assignment with `id`. Its id is not reused.
    pub fn delete(&mut self, id: u64) -> Result<Assignment> {
        let index = self.position(id)?;
        let removed = self.assignments.remove(index);

        if let Err(e) = self.store.save(&self.assignments) {
            self.assignments.insert(index, removed);
            return Err(e);
        }
        tracing::info!(id, "deleted assignment");
        Ok(removed)
    }

    pub fn set_completed(&mut self, id: u64, completed: bool) -> Result<CompletionChange> {
        let index = self.position(id)?;
        if self.assignments[index].completed == completed {
            return Ok(CompletionChange::AlreadySet);
        }

        self.assignments[index].completed = completed;
        if let Err(e) = self.store.save(&self.assignments) {
            self.assignments[index].completed = !completed;
            return Err(e);
        }
        tracing::info!(id, completed, "changed completion status");
        Ok(CompletionChange::Updated)
    }

    /// Distinct class names, sorted case-insensitively with
    /// `Uncategorized` last.
    pub fn class_list(&self) -> Vec<String> {
        let distinct: BTreeSet<&str> = self
            .assignments
            .iter()
            .map(|a| a.class_name().unwrap_or(UNCATEGORIZED))
            .collect();
        let mut classes: Vec<String> = distinct.into_iter().map(str::to_string).collect();
        classes.sort_by_key(|c| (c == UNCATEGORIZED, c.to_lowercase()));
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn due() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 30)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap()
    }

    fn new_assignment(name: &str, class: &str) -> NewAssignment {
        NewAssignment {
            name: name.into(),
            class: class.into(),
            due_date: Some(due()),
            priority: Some(Priority::Medium),
            difficulty: Some(5),
            completed: false,
        }
    }

    #[test]
    fn add_assigns_increasing_ids_and_saves() {
        let store = MemoryStore::new();
        let mut manager = AssignmentManager::open(&store).unwrap();
        assert_eq!(manager.add(new_assignment("A", "Math")).unwrap(), 1);
        assert_eq!(manager.add(new_assignment("B", "Math")).unwrap(), 2);

        let saved = store.snapshot();
        assert_eq!(saved.len(), 2);
        assert!(saved[0].date_added.is_some());
        assert!(!saved[1].completed);
    }

    #[test]
    fn ids_continue_from_loaded_maximum_and_are_not_reused() {
        let store = MemoryStore::with_assignments(vec![Assignment::new(
            7,
            "Old",
            "History",
            due(),
            Priority::Low,
            2,
        )]);
        let mut manager = AssignmentManager::open(&store).unwrap();
        let id = manager.add(new_assignment("New", "History")).unwrap();
        assert_eq!(id, 8);
        manager.delete(id).unwrap();
        assert_eq!(manager.add(new_assignment("Next", "History")).unwrap(), 9);
    }

    #[test]
    fn add_rejects_missing_fields_and_bad_difficulty() {
        let mut manager = AssignmentManager::open(MemoryStore::new()).unwrap();

        let mut missing_class = new_assignment("A", " ");
        missing_class.class = "".into();
        assert!(matches!(
            manager.add(missing_class),
            Err(CoreError::Validation(ValidationError::MissingField("class")))
        ));

        let mut no_due = new_assignment("A", "Math");
        no_due.due_date = None;
        assert!(matches!(
            manager.add(no_due),
            Err(CoreError::Validation(ValidationError::MissingField("due_date")))
        ));

        let mut too_hard = new_assignment("A", "Math");
        too_hard.difficulty = Some(11);
        assert!(matches!(
            manager.add(too_hard),
            Err(CoreError::Validation(ValidationError::DifficultyOutOfRange(11)))
        ));

        assert!(manager.assignments().is_empty());
        assert_eq!(manager.add(new_assignment("A", "Math")).unwrap(), 1);
    }

    #[test]
    fn failed_save_rolls_back_add() {
        let store = MemoryStore::new();
        let mut manager = AssignmentManager::open(&store).unwrap();
        store.set_fail_saves(true);
        assert!(manager.add(new_assignment("A", "Math")).is_err());
        assert!(manager.assignments().is_empty());

        store.set_fail_saves(false);
        assert_eq!(manager.add(new_assignment("A", "Math")).unwrap(), 1);
    }

    #[test]
    fn update_patches_only_given_fields() {
        let mut manager = AssignmentManager::open(MemoryStore::new()).unwrap();
        let id = manager.add(new_assignment("Essay", "English")).unwrap();

        manager
            .update(
                id,
                AssignmentUpdate {
                    priority: Some(Priority::High),
                    difficulty: Some(8),
                    ..Default::default()
                },
            )
            .unwrap();

        let a = manager.get(id).unwrap();
        assert_eq!(a.name, "Essay");
        assert_eq!(a.priority, Some(Priority::High));
        assert_eq!(a.difficulty, Some(8));
    }

    #[test]
    fn update_validates_and_rolls_back() {
        let store = MemoryStore::new();
        let mut manager = AssignmentManager::open(&store).unwrap();
        let id = manager.add(new_assignment("Essay", "English")).unwrap();

        let bad = AssignmentUpdate {
            difficulty: Some(0),
            ..Default::default()
        };
        assert!(manager.update(id, bad).is_err());

        store.set_fail_saves(true);
        let rename = AssignmentUpdate {
            name: Some("Renamed".into()),
            ..Default::default()
        };
        assert!(manager.update(id, rename).is_err());
        assert_eq!(manager.get(id).unwrap().name, "Essay");

        assert!(matches!(
            manager.update(99, AssignmentUpdate::default()),
            Err(CoreError::NotFound { id: 99 })
        ));
    }

    #[test]
    fn delete_rolls_back_on_failed_save() {
        let store = MemoryStore::new();
        let mut manager = AssignmentManager::open(&store).unwrap();
        manager.add(new_assignment("A", "Math")).unwrap();
        manager.add(new_assignment("B", "Math")).unwrap();

        store.set_fail_saves(true);
        assert!(manager.delete(1).is_err());
        let names: Vec<_> = manager.assignments().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn completion_reports_no_op() {
        let store = MemoryStore::new();
        let mut manager = AssignmentManager::open(&store).unwrap();
        let id = manager.add(new_assignment("A", "Math")).unwrap();

        assert_eq!(manager.set_completed(id, false).unwrap(), CompletionChange::AlreadySet);
        assert_eq!(manager.set_completed(id, true).unwrap(), CompletionChange::Updated);
        assert!(store.snapshot()[0].completed);

        store.set_fail_saves(true);
        assert!(manager.set_completed(id, false).is_err());
        assert!(manager.get(id).unwrap().completed);
    }

    #[test]
    fn class_list_sorts_uncategorized_last() {
        let mut unclassed = Assignment::new(3, "C", "", due(), Priority::Low, 1);
        unclassed.class = None;
        let store = MemoryStore::with_assignments(vec![
            Assignment::new(1, "A", "science", due(), Priority::Low, 1),
            unclassed,
            Assignment::new(2, "B", "Art", due(), Priority::Low, 1),
            Assignment::new(4, "D", "Art", due(), Priority::Low, 1),
        ]);
        let manager = AssignmentManager::open(store).unwrap();
        assert_eq!(manager.class_list(), vec!["Art", "science", "Uncategorized"]);
    }

    #[test]
    fn class_list_keeps_one_entry_per_spelling() {
        let store = MemoryStore::with_assignments(vec![
            Assignment::new(1, "A", "Art", due(), Priority::Low, 1),
            Assignment::new(2, "B", "art", due(), Priority::Low, 1),
            Assignment::new(3, "C", "Art", due(), Priority::Low, 1),
        ]);
        let manager = AssignmentManager::open(store).unwrap();
        assert_eq!(manager.class_list(), vec!["Art", "art"]);
    }

    #[test]
    fn parses_due_date_text() {
        assert_eq!(parse_due_date_text("2026-10-30 23:59").unwrap(), due());
        assert!(parse_due_date_text("30/10/2026").is_err());
    }
}
