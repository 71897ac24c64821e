use crate::calendar::{self, CalendarView};
use crate::errors::Rejection;
use crate::models::{DayStatus, Notice};
use crate::state::Workspace;
use crate::tasks::EditOutcome;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    AddTask { text: String },
    EditTask { index: usize, text: String },
    ToggleTask { index: usize },
    DeleteTask { index: usize },
    CloseDay,
    /// The page asks the user first; anything unconfirmed is dropped.
    ResetCalendar {
        #[serde(default)]
        confirmed: bool,
    },
    PrevMonth,
    NextMonth,
    CurrentMonth,
}

impl Command {
    fn touches_tasks(&self) -> bool {
        matches!(
            self,
            Self::AddTask { .. }
                | Self::EditTask { .. }
                | Self::ToggleTask { .. }
                | Self::DeleteTask { .. }
        )
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub notices: Vec<Notice>,
    pub celebrate: bool,
}

pub fn dispatch(workspace: &mut Workspace, command: Command, today: NaiveDate) -> Outcome {
    let was_done = workspace.tasks.progress_snapshot().all_done();
    let touches_tasks = command.touches_tasks();

    let mut outcome = match apply(workspace, command, today) {
        Ok(notices) => Outcome {
            notices,
            celebrate: false,
        },
        Err(rejection) => {
            debug!("command ignored: {rejection}");
            Outcome {
                notices: notice_for(&rejection).into_iter().collect(),
                celebrate: false,
            }
        }
    };

    let now_done = workspace.tasks.progress_snapshot().all_done();
    outcome.celebrate = touches_tasks && now_done && !was_done;
    outcome
}

fn apply(
    workspace: &mut Workspace,
    command: Command,
    today: NaiveDate,
) -> Result<Vec<Notice>, Rejection> {
    let Workspace {
        store,
        tasks,
        progress,
        view,
        ..
    } = workspace;

    match command {
        Command::AddTask { text } => {
            tasks.add(store, &text, false)?;
            Ok(Vec::new())
        }
        Command::EditTask { index, text } => {
            if tasks.edit(store, index, &text)? == EditOutcome::Removed {
                debug!(index, "blank edit removed task");
            }
            Ok(Vec::new())
        }
        Command::ToggleTask { index } => {
            tasks.toggle(store, index)?;
            Ok(Vec::new())
        }
        Command::DeleteTask { index } => {
            tasks.delete(store, index)?;
            Ok(Vec::new())
        }
        Command::CloseDay => {
            let snapshot = tasks.progress_snapshot();
            let status = progress.close_day(store, &calendar::date_key(today), snapshot)?;
            tasks.clear_all(store);

            let notice = match status {
                DayStatus::Completed => Notice::success(
                    "All tasks completed! Great job! Task list cleared for new tasks!",
                ),
                _ => Notice::warning(format!(
                    "Progress saved: {}/{} tasks completed. You can do better! Task list cleared for new tasks!",
                    snapshot.completed, snapshot.total
                )),
            };
            Ok(vec![notice])
        }
        Command::ResetCalendar { confirmed } => {
            if !confirmed {
                return Err(Rejection::NotConfirmed);
            }
            progress.clear_all(store);
            info!("calendar reset by user");
            Ok(vec![Notice::success("Calendar data cleared successfully!")])
        }
        Command::PrevMonth => {
            view.prev();
            Ok(Vec::new())
        }
        Command::NextMonth => {
            view.next();
            Ok(Vec::new())
        }
        Command::CurrentMonth => {
            *view = CalendarView::current(today);
            Ok(Vec::new())
        }
    }
}

fn notice_for(rejection: &Rejection) -> Option<Notice> {
    match rejection {
        Rejection::NothingToClose => Some(Notice::warning(rejection.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProgressSnapshot, Severity, Task};
    use crate::progress::{COMPLETED_KEY, PARTIAL_KEY};
    use crate::storage::LocalStore;
    use crate::tasks::TASKS_KEY;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn workspace(today: NaiveDate) -> Workspace {
        Workspace::load(LocalStore::new(), today)
    }

    fn add(ws: &mut Workspace, text: &str, today: NaiveDate) {
        dispatch(ws, Command::AddTask { text: text.into() }, today);
    }

    #[test]
    fn partial_close_records_day_and_clears_list() {
        let today = day(2025, 6, 15);
        let mut ws = workspace(today);
        add(&mut ws, "A", today);
        add(&mut ws, "B", today);
        dispatch(&mut ws, Command::ToggleTask { index: 0 }, today);

        let outcome = dispatch(&mut ws, Command::CloseDay, today);
        assert_eq!(outcome.notices.len(), 1);
        assert_eq!(outcome.notices[0].severity, Severity::Warning);
        assert!(outcome.notices[0].message.contains("1/2"));

        assert_eq!(ws.progress.status_of("2025-06-15"), DayStatus::Partial);
        assert!(ws.tasks.is_empty());
        assert_eq!(ws.store.get(TASKS_KEY), Some("[]"));
        assert_eq!(ws.store.get(PARTIAL_KEY), Some(r#"["2025-06-15"]"#));
    }

    #[test]
    fn full_close_promotes_a_partial_day() {
        let today = day(2025, 6, 16);
        let mut ws = workspace(today);
        add(&mut ws, "A", today);
        add(&mut ws, "B", today);
        dispatch(&mut ws, Command::CloseDay, today);
        assert_eq!(ws.progress.status_of("2025-06-16"), DayStatus::Partial);

        add(&mut ws, "A", today);
        add(&mut ws, "B", today);
        dispatch(&mut ws, Command::ToggleTask { index: 0 }, today);
        dispatch(&mut ws, Command::ToggleTask { index: 1 }, today);
        let outcome = dispatch(&mut ws, Command::CloseDay, today);

        assert_eq!(outcome.notices[0].severity, Severity::Success);
        assert_eq!(ws.progress.status_of("2025-06-16"), DayStatus::Completed);
        assert_eq!(ws.store.get(COMPLETED_KEY), Some(r#"["2025-06-16"]"#));
        assert_eq!(ws.store.get(PARTIAL_KEY), Some("[]"));
    }

    #[test]
    fn closing_an_empty_day_warns_and_changes_nothing() {
        let today = day(2025, 6, 17);
        let mut ws = workspace(today);
        let before = ws.store.clone();

        let outcome = dispatch(&mut ws, Command::CloseDay, today);
        assert_eq!(
            outcome.notices,
            vec![Notice::warning("Add at least one task first!")]
        );
        assert_eq!(ws.store, before);
        assert_eq!(ws.progress.status_of("2025-06-17"), DayStatus::NoRecord);
    }

    #[test]
    fn celebrates_only_when_a_task_change_completes_the_list() {
        let today = day(2025, 6, 18);
        let mut ws = workspace(today);
        add(&mut ws, "A", today);
        add(&mut ws, "B", today);

        assert!(!dispatch(&mut ws, Command::ToggleTask { index: 0 }, today).celebrate);
        assert!(dispatch(&mut ws, Command::ToggleTask { index: 1 }, today).celebrate);
        assert!(!dispatch(&mut ws, Command::NextMonth, today).celebrate);

        // Deleting the last open task also completes the list.
        dispatch(&mut ws, Command::ToggleTask { index: 1 }, today);
        assert!(dispatch(&mut ws, Command::DeleteTask { index: 1 }, today).celebrate);
    }

    #[test]
    fn reload_does_not_celebrate_a_finished_list() {
        let today = day(2025, 6, 18);
        let mut store = LocalStore::new();
        store.set_json(TASKS_KEY, &[Task { text: "A".into(), completed: true }]);
        let mut ws = Workspace::load(store, today);

        assert_eq!(ws.tasks.progress_snapshot(), ProgressSnapshot { completed: 1, total: 1 });
        assert!(!dispatch(&mut ws, Command::PrevMonth, today).celebrate);
    }

    #[test]
    fn reset_requires_confirmation() {
        let today = day(2025, 6, 19);
        let mut ws = workspace(today);
        add(&mut ws, "A", today);
        dispatch(&mut ws, Command::CloseDay, today);

        let outcome = dispatch(&mut ws, Command::ResetCalendar { confirmed: false }, today);
        assert!(outcome.notices.is_empty());
        assert_eq!(ws.progress.status_of("2025-06-19"), DayStatus::Partial);

        let outcome = dispatch(&mut ws, Command::ResetCalendar { confirmed: true }, today);
        assert_eq!(outcome.notices[0].severity, Severity::Success);
        assert_eq!(ws.progress.status_of("2025-06-19"), DayStatus::NoRecord);
        assert!(!ws.store.contains(COMPLETED_KEY));
    }

    #[test]
    fn month_navigation_and_close_day_use_different_dates() {
        let today = day(2025, 1, 10);
        let mut ws = workspace(today);
        dispatch(&mut ws, Command::PrevMonth, today);
        assert_eq!(ws.view, CalendarView { year: 2024, month: 11 });

        add(&mut ws, "A", today);
        dispatch(&mut ws, Command::ToggleTask { index: 0 }, today);
        dispatch(&mut ws, Command::CloseDay, today);
        assert_eq!(ws.progress.status_of("2025-01-10"), DayStatus::Completed);

        dispatch(&mut ws, Command::CurrentMonth, today);
        assert_eq!(ws.view, CalendarView { year: 2025, month: 0 });
    }

    #[test]
    fn commands_decode_from_tagged_json() {
        let command: Command =
            serde_json::from_str(r#"{"type":"edit_task","index":2,"text":"x"}"#).unwrap();
        assert_eq!(command, Command::EditTask { index: 2, text: "x".into() });

        let command: Command = serde_json::from_str(r#"{"type":"reset_calendar"}"#).unwrap();
        assert_eq!(command, Command::ResetCalendar { confirmed: false });

        let command: Command = serde_json::from_str(r#"{"type":"close_day"}"#).unwrap();
        assert_eq!(command, Command::CloseDay);
    }
}
