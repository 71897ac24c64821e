use crate::models::ClockReading;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

pub fn now() -> ClockReading {
    reading(&Local::now())
}

pub fn reading<Tz>(now: &DateTime<Tz>) -> ClockReading
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ClockReading {
        time: now.format("%H:%M:%S").to_string(),
        date: now.format("%B %-d, %Y").to_string(),
        weekday: now.format("%A").to_string(),
        timezone: format!("Local (UTC{})", now.format("%:z")),
    }
}
