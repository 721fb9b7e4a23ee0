//! Assignment persistence.
//!
//! The JSON file holds a flat array of assignment objects. Records are decoded
//! one at a time, so a record with a bad field never costs the others. Only a
//! file that is not a JSON array is moved aside to
//! `assignments.json.corrupted.<timestamp>` and treated as empty.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use crate::assignment::Assignment;
use crate::error::{Result, StorageError};

/// Load/save seam for the assignment manager.
pub trait AssignmentStore {
    fn load(&self) -> Result<Vec<Assignment>>;
    fn save(&self, assignments: &[Assignment]) -> Result<()>;
}

/// Pretty-printed JSON file store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store at `path`, creating the parent directory and an empty
    /// array file if they do not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { path: path.into() };
        if let Some(parent) = store.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::WriteFailed {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        if !store.path.exists() {
            store.save(&[])?;
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn backup_corrupted(&self) -> Option<PathBuf> {
        let stamp = chrono::Local::now().format("%Y%m%d%H%M%S");
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".corrupted.{stamp}"));
        let backup = PathBuf::from(name);
        match std::fs::rename(&self.path, &backup) {
            Ok(()) => Some(backup),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to back up corrupted assignments file");
                None
            }
        }
    }
}

impl AssignmentStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Assignment>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::ReadFailed {
                    path: self.path.clone(),
                    source,
                }
                .into())
            }
        };

        let records = match serde_json::from_str::<Vec<serde_json::Value>>(&content) {
            Ok(records) => records,
            Err(e) => {
                let backup = self.backup_corrupted();
                tracing::warn!(
                    path = %self.path.display(),
                    backup = ?backup,
                    error = %e,
                    "assignments file is corrupted; starting empty"
                );
                return Ok(Vec::new());
            }
        };

        let total = records.len();
        let assignments: Vec<Assignment> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(assignment) => Some(assignment),
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), index, error = %e, "skipping unreadable assignment record");
                    None
                }
            })
            .collect();
        tracing::debug!(
            path = %self.path.display(),
            count = assignments.len(),
            skipped = total - assignments.len(),
            "loaded assignments"
        );
        Ok(assignments)
    }

    fn save(&self, assignments: &[Assignment]) -> Result<()> {
        let content = serde_json::to_string_pretty(assignments)
            .map_err(|e| StorageError::EncodeFailed(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

/// In-memory store, used for embedding and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    assignments: RefCell<Vec<Assignment>>,
    fail_saves: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assignments(assignments: Vec<Assignment>) -> Self {
        Self {
            assignments: RefCell::new(assignments),
            fail_saves: Cell::new(false),
        }
    }

    /// Make subsequent saves fail with [`StorageError::Rejected`].
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// What the last successful save wrote.
    pub fn snapshot(&self) -> Vec<Assignment> {
        self.assignments.borrow().clone()
    }
}

impl AssignmentStore for MemoryStore {
    fn load(&self) -> Result<Vec<Assignment>> {
        Ok(self.snapshot())
    }

    fn save(&self, assignments: &[Assignment]) -> Result<()> {
        if self.fail_saves.get() {
            return Err(StorageError::Rejected.into());
        }
        *self.assignments.borrow_mut() = assignments.to_vec();
        Ok(())
    }
}

impl<S: AssignmentStore + ?Sized> AssignmentStore for &S {
    fn load(&self) -> Result<Vec<Assignment>> {
        (**self).load()
    }

    fn save(&self, assignments: &[Assignment]) -> Result<()> {
        (**self).save(assignments)
    }
}
