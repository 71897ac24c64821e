use crate::errors::Rejection;
use crate::models::{DayStatus, HistoryResponse, ProgressSnapshot};
use crate::storage::LocalStore;
use std::collections::BTreeSet;
use tracing::info;

pub const COMPLETED_KEY: &str = "completedProgress";
pub const PARTIAL_KEY: &str = "sadProgress";

/// History of closed-out days, split into fully and partially completed.
/// A date key is in at most one of the two sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressStore {
    completed: BTreeSet<String>,
    partial: BTreeSet<String>,
}

impl ProgressStore {
    pub fn load(store: &LocalStore) -> Self {
        let completed: BTreeSet<String> = store.get_json(COMPLETED_KEY).unwrap_or_default();
        let mut partial: BTreeSet<String> = store.get_json(PARTIAL_KEY).unwrap_or_default();
        // Hand-edited data could list a day twice; the full record wins.
        partial.retain(|key| !completed.contains(key));
        Self { completed, partial }
    }

    pub fn close_day(
        &mut self,
        store: &mut LocalStore,
        date_key: &str,
        snapshot: ProgressSnapshot,
    ) -> Result<DayStatus, Rejection> {
        if snapshot.total == 0 {
            return Err(Rejection::NothingToClose);
        }

        let status = if snapshot.completed == snapshot.total {
            self.partial.remove(date_key);
            self.completed.insert(date_key.to_string());
            DayStatus::Completed
        } else {
            self.completed.remove(date_key);
            self.partial.insert(date_key.to_string());
            DayStatus::Partial
        };
        info!(
            date = date_key,
            completed = snapshot.completed,
            total = snapshot.total,
            ?status,
            "day closed"
        );
        self.save(store);
        Ok(status)
    }

    pub fn status_of(&self, date_key: &str) -> DayStatus {
        if self.completed.contains(date_key) {
            DayStatus::Completed
        } else if self.partial.contains(date_key) {
            DayStatus::Partial
        } else {
            DayStatus::NoRecord
        }
    }

    pub fn clear_all(&mut self, store: &mut LocalStore) {
        self.completed.clear();
        self.partial.clear();
        store.remove(COMPLETED_KEY);
        store.remove(PARTIAL_KEY);
        info!("progress history cleared");
    }

    pub fn history(&self) -> HistoryResponse {
        HistoryResponse {
            completed_days: self.completed.iter().cloned().collect(),
            partial_days: self.partial.iter().cloned().collect(),
        }
    }

    fn save(&self, store: &mut LocalStore) {
        store.set_json(COMPLETED_KEY, &self.completed);
        store.set_json(PARTIAL_KEY, &self.partial);
    }
}
