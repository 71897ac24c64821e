use crate::errors::Rejection;
use crate::models::{ProgressSnapshot, Task};
use crate::storage::LocalStore;
use tracing::debug;

pub const TASKS_KEY: &str = "tasks";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Renamed,
    Removed,
}

/// Every successful mutation rewrites the full list under [`TASKS_KEY`]
/// before returning, so the store never lags behind memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn load(store: &LocalStore) -> Self {
        let mut tasks: Vec<Task> = store.get_json(TASKS_KEY).unwrap_or_default();
        tasks.retain(|task| !task.text.trim().is_empty());
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn add(
        &mut self,
        store: &mut LocalStore,
        text: &str,
        completed: bool,
    ) -> Result<(), Rejection> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Rejection::EmptyText);
        }

        self.tasks.push(Task {
            text: text.to_string(),
            completed,
        });
        debug!(count = self.tasks.len(), "task added");
        self.save(store);
        Ok(())
    }

    pub fn edit(
        &mut self,
        store: &mut LocalStore,
        index: usize,
        text: &str,
    ) -> Result<EditOutcome, Rejection> {
        let task = self.tasks.get_mut(index).ok_or(Rejection::NoSuchTask(index))?;
        if task.completed {
            return Err(Rejection::TaskCompleted(index));
        }

        let text = text.trim();
        let outcome = if text.is_empty() {
            self.tasks.remove(index);
            EditOutcome::Removed
        } else {
            task.text = text.to_string();
            EditOutcome::Renamed
        };
        self.save(store);
        Ok(outcome)
    }

    pub fn toggle(&mut self, store: &mut LocalStore, index: usize) -> Result<bool, Rejection> {
        let task = self.tasks.get_mut(index).ok_or(Rejection::NoSuchTask(index))?;
        task.completed = !task.completed;
        let completed = task.completed;
        self.save(store);
        Ok(completed)
    }

    pub fn delete(&mut self, store: &mut LocalStore, index: usize) -> Result<Task, Rejection> {
        if index >= self.tasks.len() {
            return Err(Rejection::NoSuchTask(index));
        }
        let removed = self.tasks.remove(index);
        self.save(store);
        Ok(removed)
    }

    pub fn clear_all(&mut self, store: &mut LocalStore) {
        self.tasks.clear();
        self.save(store);
    }

    pub fn progress_snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            completed: self.tasks.iter().filter(|task| task.completed).count(),
            total: self.tasks.len(),
        }
    }

    fn save(&self, store: &mut LocalStore) {
        store.set_json(TASKS_KEY, &self.tasks);
    }
}
