//! The task store: the in-memory task collection plus its persistence.
//!
//! The store exclusively owns the collection. Interactive handlers mutate
//! it through [`TaskStore::add`], [`TaskStore::update`], and
//! [`TaskStore::delete`]; the reminder scanner only ever reads through
//! [`TaskStore::snapshot`], which clones the collection under a briefly
//! held lock. A scan therefore observes either the pre- or post-mutation
//! state of a concurrent command, never a torn one.
//!
//! ## Persistence
//!
//! The whole collection is rewritten to `tasks.json` on every mutation.
//! Writes go to a sibling temporary file which is then renamed over the
//! target, so a failed save leaves the previously persisted file intact.
//! A missing file on load is an empty collection, not an error; an
//! unreadable file is reported and degrades to an empty collection so
//! the application keeps running.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskPatch};
use crate::msg_warning;
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const TASKS_FILE_NAME: &str = "tasks.json";

/// Store operation failures.
///
/// `NotFound` is a user-level outcome handlers report and recover from;
/// the other variants surface persistence failures to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("task '{0}' not found")]
    NotFound(String),
    #[error("task file access failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("task file encoding failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub struct TaskStore {
    tasks: Mutex<Vec<Task>>,
    path: PathBuf,
}

impl TaskStore {
    /// Opens the store backed by the task file in the application data
    /// directory, loading whatever is persisted there.
    pub fn new() -> Result<Self, StoreError> {
        let path = DataStorage::new().get_path(TASKS_FILE_NAME)?;
        Self::with_path(path)
    }

    /// Opens a store backed by an explicit file path.
    pub fn with_path(path: PathBuf) -> Result<Self, StoreError> {
        let tasks = Self::load(&path)?;
        Ok(TaskStore {
            tasks: Mutex::new(tasks),
            path,
        })
    }

    fn load(path: &Path) -> Result<Vec<Task>, StoreError> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(path)?;
        match serde_json::from_str(&raw) {
            Ok(tasks) => Ok(tasks),
            Err(err) => {
                // A damaged file must not take the application down.
                msg_warning!(Message::TaskFileUnreadable(err.to_string()));
                Ok(Vec::new())
            }
        }
    }

    /// Appends a task to the collection and persists.
    pub fn add(&self, task: Task) -> Result<(), StoreError> {
        let mut tasks = self.tasks.lock();
        tasks.push(task);
        self.persist(&tasks)
    }

    /// Case-insensitive exact-match lookup; returns a copy of the first
    /// match in current collection order.
    pub fn find(&self, name: &str) -> Option<Task> {
        self.tasks.lock().iter().find(|task| task.matches(name)).cloned()
    }

    /// Applies a partial update to the first task matching `name` and
    /// persists. Fields the patch leaves out keep their prior values.
    pub fn update(&self, name: &str, patch: &TaskPatch) -> Result<(), StoreError> {
        let mut tasks = self.tasks.lock();
        let index = tasks
            .iter()
            .position(|task| task.matches(name))
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        tasks[index].apply(patch);
        self.persist(&tasks)
    }

    /// Removes the first task matching `name` and persists.
    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        let mut tasks = self.tasks.lock();
        let index = tasks
            .iter()
            .position(|task| task.matches(name))
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        tasks.remove(index);
        self.persist(&tasks)
    }

    /// Returns a point-in-time copy of the collection.
    ///
    /// This is the only read path the reminder scanner uses; the lock is
    /// held just long enough to clone.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.tasks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.lock().is_empty()
    }

    /// Persists the current collection, for the final save on shutdown.
    pub fn save(&self) -> Result<(), StoreError> {
        let tasks = self.tasks.lock();
        self.persist(&tasks)
    }

    /// Writes the collection to a temporary sibling file and renames it
    /// over the task file, so readers never see a partial write.
    fn persist(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(tasks)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
