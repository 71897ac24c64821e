use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProgressSnapshot {
    pub completed: usize,
    pub total: usize,
}

impl ProgressSnapshot {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }

    pub fn all_done(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Completed,
    Partial,
    NoRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalendarCell {
    Blank,
    Day {
        day: u32,
        date_key: String,
        today: bool,
        status: DayStatus,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarGrid {
    pub title: String,
    pub year: i32,
    pub month: u32,
    pub weekdays: [&'static str; 7],
    pub cells: Vec<CalendarCell>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockReading {
    pub time: String,
    pub date: String,
    pub weekday: String,
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HistoryResponse {
    pub completed_days: Vec<String>,
    pub partial_days: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub tasks: Vec<Task>,
    pub progress: ProgressSnapshot,
    pub percent: f64,
    pub all_done: bool,
    pub calendar: CalendarGrid,
    pub history: HistoryResponse,
    pub clock: ClockReading,
}

#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub state: StateResponse,
    pub notices: Vec<Notice>,
    pub celebrate: bool,
}

#[derive(Debug, Deserialize)]
pub struct AddTaskForm {
    pub text: String,
}
