//! Date keys, month grids and week strips.
//!
//! Weeks start on Sunday; weekday numbers run 0 (Sunday) through 6 (Saturday).

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::error::{DiaryError, Result};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Short weekday labels indexed by weekday number.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Format a date as a `YYYY-MM-DD` key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` key.
pub fn parse_date_key(value: &str) -> Result<NaiveDate> {
    // chrono accepts unpadded fields; keys must be exactly ten characters.
    if value.len() != 10 {
        return Err(invalid_date(value));
    }
    NaiveDate::parse_from_str(value, DATE_KEY_FORMAT).map_err(|_| invalid_date(value))
}

fn invalid_date(value: &str) -> DiaryError {
    DiaryError::InvalidInput(format!(
        "Invalid date (expected YYYY-MM-DD): {}",
        value
    ))
}

/// Number of days in `month` (1..=12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = first_of_month(year, month)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| DiaryError::InvalidInput(format!("Year out of range: {}", year)))?;
    Ok((next - first).num_days() as u32)
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| DiaryError::InvalidInput(format!("Invalid month: {}-{}", year, month)))
}

/// Sunday-based weekday number.
pub fn weekday_number(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// One cell of a month grid. Leading padding cells have no day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub day: Option<u32>,
    pub weekday: Option<u32>,
    pub is_today: bool,
    pub is_selected: bool,
}

impl DayCell {
    fn blank() -> Self {
        Self {
            day: None,
            weekday: None,
            is_today: false,
            is_selected: false,
        }
    }
}

/// Build the cells of a month view: blanks up to the weekday of the 1st,
/// then one cell per day.
pub fn month_grid(
    year: i32,
    month: u32,
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<Vec<DayCell>> {
    let first = first_of_month(year, month)?;
    let lead = weekday_number(first) as usize;
    let days = days_in_month(year, month)?;

    let mut cells = Vec::with_capacity(lead + days as usize);
    cells.extend(std::iter::repeat_with(DayCell::blank).take(lead));
    for offset in 0..days {
        let date = first + Duration::days(offset as i64);
        cells.push(DayCell {
            day: Some(date.day()),
            weekday: Some(weekday_number(date)),
            is_today: date == today,
            is_selected: selected == Some(date),
        });
    }
    Ok(cells)
}

/// One day of a week strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekDay {
    pub date: NaiveDate,
    pub label: &'static str,
    pub is_today: bool,
}

/// Sunday of the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(weekday_number(date) as i64)
}

/// The seven days (Sunday first) of the week containing `date`.
pub fn week_of(date: NaiveDate, today: NaiveDate) -> [WeekDay; 7] {
    let start = start_of_week(date);
    std::array::from_fn(|index| {
        let current = start + Duration::days(index as i64);
        WeekDay {
            date: current,
            label: WEEKDAY_LABELS[weekday_number(current) as usize],
            is_today: current == today,
        }
    })
}
