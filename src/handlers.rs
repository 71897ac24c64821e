use crate::calendar::CalendarView;
use crate::clock;
use crate::commands::{Command, Outcome, dispatch};
use crate::errors::AppError;
use crate::models::{AddTaskForm, CommandResponse, StateResponse};
use crate::state::AppState;
use crate::storage::persist_store;
use crate::ui::render_index;
use axum::{
    Form, Json,
    extract::{State, rejection::JsonRejection},
    response::{Html, Redirect},
};
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = today();
    let mut workspace = state.workspace.lock().await;
    // A page load always starts on the real current month.
    workspace.view = CalendarView::current(today);
    let flash = std::mem::take(&mut workspace.flash);
    let progress = workspace.tasks.progress_snapshot();
    Html(render_index(&clock::now(), &progress, &flash))
}

pub async fn get_state(State(state): State<AppState>) -> Json<StateResponse> {
    let workspace = state.workspace.lock().await;
    Json(workspace.snapshot(today(), clock::now()))
}

pub async fn command(
    State(state): State<AppState>,
    payload: Result<Json<Command>, JsonRejection>,
) -> Result<Json<CommandResponse>, AppError> {
    let Json(command) =
        payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    let (outcome, state) = run_command(&state, command, false).await?;

    Ok(Json(CommandResponse {
        state,
        notices: outcome.notices,
        celebrate: outcome.celebrate,
    }))
}

pub async fn add_task_form(
    State(state): State<AppState>,
    Form(form): Form<AddTaskForm>,
) -> Result<Redirect, AppError> {
    run_command(&state, Command::AddTask { text: form.text }, true).await?;
    Ok(Redirect::to("/"))
}

pub async fn close_day_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    run_command(&state, Command::CloseDay, true).await?;
    Ok(Redirect::to("/"))
}

/// Dispatches and flushes under one lock. A failed flush restores the
/// workspace so memory never runs ahead of disk.
async fn run_command(
    state: &AppState,
    command: Command,
    flash: bool,
) -> Result<(Outcome, StateResponse), AppError> {
    let today = today();
    let mut workspace = state.workspace.lock().await;
    let before = workspace.clone();

    debug!(?command, "dispatching");
    let outcome = dispatch(&mut workspace, command, today);

    if workspace.store != before.store {
        if let Err(err) = persist_store(&state.data_path, &workspace.store).await {
            warn!("failed to persist, rolling back: {}", err.message);
            *workspace = before;
            return Err(err);
        }
    }

    if flash {
        workspace.flash.extend(outcome.notices.iter().cloned());
    }

    Ok((outcome, workspace.snapshot(today, clock::now())))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Workspace;
    use crate::storage::LocalStore;
    use crate::tasks::TASKS_KEY;

    fn app_state(data_path: std::path::PathBuf) -> AppState {
        AppState::new(data_path, Workspace::load(LocalStore::new(), today()))
    }

    #[tokio::test]
    async fn failed_persist_rolls_back_workspace() {
        let dir = tempfile::tempdir().expect("tempdir");
        // Renaming the temp file onto a directory fails.
        let data_path = dir.path().join("state");
        std::fs::create_dir(&data_path).expect("mkdir");
        let state = app_state(data_path);

        let result = run_command(&state, Command::AddTask { text: "A".into() }, false).await;
        assert!(result.is_err());

        let workspace = state.workspace.lock().await;
        assert!(workspace.tasks.is_empty());
        assert!(!workspace.store.contains(TASKS_KEY));
    }

    #[tokio::test]
    async fn form_commands_queue_notices_for_the_next_page() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = app_state(dir.path().join("state.json"));

        run_command(&state, Command::CloseDay, true).await.expect("close day");
        {
            let workspace = state.workspace.lock().await;
            assert_eq!(workspace.flash.len(), 1);
            assert_eq!(workspace.flash[0].message, "Add at least one task first!");
        }

        let Html(page) = index(State(state.clone())).await;
        assert!(page.contains("Add at least one task first!"));
        assert!(state.workspace.lock().await.flash.is_empty());
    }

    #[tokio::test]
    async fn api_commands_do_not_queue_notices() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = app_state(dir.path().join("state.json"));

        let (outcome, _) = run_command(&state, Command::CloseDay, false).await.expect("close day");
        assert_eq!(outcome.notices.len(), 1);
        assert!(state.workspace.lock().await.flash.is_empty());
    }
}
