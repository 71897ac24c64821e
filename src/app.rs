use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/tasks", post(handlers::add_task_form))
        .route("/day/close", post(handlers::close_day_form))
        .route("/api/state", get(handlers::get_state))
        .route("/api/command", post(handlers::command))
        .with_state(state)
}
