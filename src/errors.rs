use axum::http::StatusCode;
use std::fmt;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Why a user action left the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    EmptyText,
    NoSuchTask(usize),
    TaskCompleted(usize),
    NothingToClose,
    NotConfirmed,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text is empty"),
            Self::NoSuchTask(index) => write!(f, "no task at index {index}"),
            Self::TaskCompleted(index) => {
                write!(f, "task {index} is completed and cannot be edited")
            }
            Self::NothingToClose => write!(f, "Add at least one task first!"),
            Self::NotConfirmed => write!(f, "calendar reset was not confirmed"),
        }
    }
}

impl std::error::Error for Rejection {}
