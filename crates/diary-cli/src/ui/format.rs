//! String formatting utilities for UI rendering.

use chrono::{Local, NaiveDate, TimeZone};

use diary_core::calendar::{parse_date_key, weekday_number, WEEKDAY_LABELS};

/// Truncate a string to `max_len` characters, adding an ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max_len).collect();
    format!("{}...", truncated)
}

/// Collapse newlines so a preview fits on one line.
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}

/// One-line preview of entry text.
pub fn preview(text: &str, max_chars: usize) -> String {
    truncate(&single_line(text), max_chars)
}

/// "2024-05-01 (Wed)"; keys that do not parse are returned unchanged.
pub fn date_label(date: &str) -> String {
    match parse_date_key(date) {
        Ok(parsed) => format!("{} ({})", date, weekday_label(parsed)),
        Err(_) => date.to_string(),
    }
}

pub fn weekday_label(date: NaiveDate) -> &'static str {
    WEEKDAY_LABELS[weekday_number(date) as usize]
}

/// Local "HH:MM" for an epoch-millisecond timestamp.
pub fn time_label(created_at: i64) -> String {
    time_label_in(&Local, created_at)
}

pub fn time_label_in<Tz: TimeZone>(tz: &Tz, created_at: i64) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match tz.timestamp_millis_opt(created_at).single() {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}
