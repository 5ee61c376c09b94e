//! Month and week views.

use std::collections::{BTreeSet, HashMap};

use chrono::Datelike;
use serde::Serialize;

use diary_core::calendar::{date_key, month_grid, week_of, DayCell, WEEKDAY_LABELS};

use crate::app::AppContext;
use crate::cli::{CalendarArgs, WeekArgs};
use crate::helpers::{resolve_date, resolve_year, today};
use crate::output::print_json;
use crate::ui::theme::{styled, styles};
use crate::ui::{header, print, simple_table, Column, UiContext};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CalendarDay {
    #[serde(flatten)]
    cell: DayCell,
    has_entries: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WeekDayReport {
    date: String,
    label: &'static str,
    is_today: bool,
    entry_count: usize,
}

pub async fn handle_calendar(ctx: &AppContext<'_>, args: &CalendarArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(&args.output);
    let now = today();
    let year = resolve_year(args.year);
    let month = args.month.unwrap_or_else(|| now.month());

    let store = ctx.open_store()?;
    let marked = store.dates_with_entries(year, month).await?;
    let grid = month_grid(year, month, None, now)?;

    if ui.mode.is_json() {
        let days: Vec<CalendarDay> = grid
            .into_iter()
            .map(|cell| {
                let has_entries = cell
                    .day
                    .is_some_and(|d| marked.contains(&day_key(year, month, d)));
                CalendarDay { cell, has_entries }
            })
            .collect();
        return print_json(&days);
    }

    if !ui.mode.is_pretty() {
        for date in &marked {
            println!("{}", date);
        }
        return Ok(());
    }

    if !ctx.quiet() {
        let label = format!("{}-{:02}", year, month);
        print(&ui, &header(&ui, "calendar", Some(label.as_str())));
    }
    println!("{}", render_grid(&ui, &grid, year, month, &marked));
    Ok(())
}

pub async fn handle_week(ctx: &AppContext<'_>, args: &WeekArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(&args.output);
    let date = resolve_date(args.date.as_deref())?;
    let store = ctx.open_store()?;

    let mut counts: HashMap<String, usize> = HashMap::new();
    for entry in store.get_all().await {
        *counts.entry(entry.date).or_insert(0) += 1;
    }

    let days: Vec<WeekDayReport> = week_of(date, today())
        .into_iter()
        .map(|day| {
            let key = date_key(day.date);
            let entry_count = counts.get(&key).copied().unwrap_or(0);
            WeekDayReport {
                date: key,
                label: day.label,
                is_today: day.is_today,
                entry_count,
            }
        })
        .collect();

    if ui.mode.is_json() {
        return print_json(&days);
    }
    if !ctx.quiet() {
        print(&ui, &header(&ui, "week", Some(date_key(date).as_str())));
    }
    let rows: Vec<Vec<String>> = days
        .iter()
        .map(|d| {
            let marker = if d.is_today { "*" } else { "" };
            vec![
                d.label.to_string(),
                format!("{}{}", d.date, marker),
                d.entry_count.to_string(),
            ]
        })
        .collect();
    let columns = [Column::new("DAY"), Column::new("DATE"), Column::new("ENTRIES")];
    println!("{}", simple_table(&ui, &columns, &rows));
    Ok(())
}

fn day_key(year: i32, month: u32, day: u32) -> String {
    format!("{}-{:02}-{:02}", year, month, day)
}

/// Seven-column grid. Days with entries get a trailing `*`; today is bold.
fn render_grid(
    ui: &UiContext,
    grid: &[DayCell],
    year: i32,
    month: u32,
    marked: &BTreeSet<String>,
) -> String {
    let mut lines = vec![WEEKDAY_LABELS
        .iter()
        .map(|l| format!("{:>4}", l))
        .collect::<String>()];

    for week in grid.chunks(7) {
        let mut line = String::new();
        for cell in week {
            let text = match cell.day {
                Some(day) => {
                    let mark = if marked.contains(&day_key(year, month, day)) {
                        "*"
                    } else {
                        " "
                    };
                    format!("{:>3}{}", day, mark)
                }
                None => "    ".to_string(),
            };
            if cell.is_today {
                line.push_str(&styled(&text, styles::bold(), ui.color));
            } else {
                line.push_str(&text);
            }
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}
