use crate::models::{CalendarCell, CalendarGrid, DayStatus};
use chrono::{Datelike, NaiveDate};

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Canonical `YYYY-MM-DD` key; `month` is 0-based. Keys already on disk
/// depend on this exact layout.
pub fn date_key_for(year: i32, month: u32, day: u32) -> String {
    format!("{year}-{:02}-{day:02}", month + 1)
}

pub fn date_key(date: NaiveDate) -> String {
    date_key_for(date.year(), date.month0(), date.day())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    pub year: i32,
    /// 0-based, 0 = January.
    pub month: u32,
}

impl CalendarView {
    pub fn current(today: NaiveDate) -> Self {
        Self {
            year: today.year(),
            month: today.month0(),
        }
    }

    pub fn prev(&mut self) {
        if self.month == 0 {
            self.month = 11;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.month >= 11 {
            self.month = 0;
            self.year += 1;
        } else {
            self.month += 1;
        }
    }
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month >= 11 { (year + 1, 1) } else { (year, month + 2) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?
        .pred_opt()
        .map(|last| last.day())
}

/// Sunday-first grid. Months outside chrono's range render with no cells.
pub fn render<F>(year: i32, month: u32, today: NaiveDate, lookup: F) -> CalendarGrid
where
    F: Fn(&str) -> DayStatus,
{
    let month = month.min(11);
    let title = format!("{} {year}", MONTH_NAMES[month as usize]);
    let mut cells = Vec::new();

    if let (Some(first), Some(last_day)) = (
        NaiveDate::from_ymd_opt(year, month + 1, 1),
        days_in_month(year, month),
    ) {
        let offset = first.weekday().num_days_from_sunday();
        cells.reserve((offset + last_day) as usize);
        cells.extend((0..offset).map(|_| CalendarCell::Blank));

        for day in 1..=last_day {
            let date_key = date_key_for(year, month, day);
            let is_today =
                today.year() == year && today.month0() == month && today.day() == day;
            cells.push(CalendarCell::Day {
                day,
                today: is_today,
                status: lookup(&date_key),
                date_key,
            });
        }
    }

    CalendarGrid {
        title,
        year,
        month,
        weekdays: WEEKDAYS,
        cells,
    }
}
