pub mod app;
pub mod calendar;
pub mod clock;
pub mod commands;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod progress;
pub mod state;
pub mod storage;
pub mod tasks;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::{AppState, Workspace};
pub use storage::{load_store, persist_store};
