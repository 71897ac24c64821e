use crate::calendar::{self, CalendarView};
use crate::models::{ClockReading, Notice, StateResponse};
use crate::progress::ProgressStore;
use crate::storage::LocalStore;
use crate::tasks::TaskStore;
use chrono::NaiveDate;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct Workspace {
    pub store: LocalStore,
    pub tasks: TaskStore,
    pub progress: ProgressStore,
    pub view: CalendarView,
    /// Notices from form posts, shown by the next page load.
    pub flash: Vec<Notice>,
}

impl Workspace {
    pub fn load(store: LocalStore, today: NaiveDate) -> Self {
        Self {
            tasks: TaskStore::load(&store),
            progress: ProgressStore::load(&store),
            view: CalendarView::current(today),
            flash: Vec::new(),
            store,
        }
    }

    pub fn snapshot(&self, today: NaiveDate, clock: ClockReading) -> StateResponse {
        let progress = self.tasks.progress_snapshot();
        let calendar = calendar::render(self.view.year, self.view.month, today, |key| {
            self.progress.status_of(key)
        });

        StateResponse {
            tasks: self.tasks.tasks().to_vec(),
            percent: progress.percent(),
            all_done: progress.all_done(),
            progress,
            calendar,
            history: self.progress.history(),
            clock,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub workspace: Arc<Mutex<Workspace>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, workspace: Workspace) -> Self {
        Self {
            data_path,
            workspace: Arc::new(Mutex::new(workspace)),
        }
    }
}
